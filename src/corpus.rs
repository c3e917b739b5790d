// Corpus reader: already-scraped tweet texts, one per line.

use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Read a corpus file: one document per line, blank lines skipped.
pub fn read_corpus(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let documents = parse_corpus(&raw);
    info!(path = %path.display(), documents = documents.len(), "Read corpus");
    Ok(documents)
}

/// Split corpus text into documents, trimming each line.
pub fn parse_corpus(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
