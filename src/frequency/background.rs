// Background frequency table: baseline word rates from a reference corpus.
//
// The file is a CSV with a header naming at least `word`, `occurrences` and
// `frequency` columns, in any order. It is loaded once per session and
// only read after that.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{AnalysisError, Result};

/// Baseline rate for one word in the background corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundEntry {
    /// Fraction of all background tokens that are this word, in [0, 1]
    pub frequency: f64,
    /// Raw count of the word in the background corpus
    pub occurrences: u64,
}

#[derive(Debug, Deserialize)]
struct BackgroundRecord {
    word: String,
    occurrences: u64,
    frequency: f64,
}

/// Read-only word -> background entry lookup.
#[derive(Debug, Clone, Default)]
pub struct BackgroundTable {
    entries: HashMap<String, BackgroundEntry>,
}

impl BackgroundTable {
    /// Load a background table from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file, path)?;
        info!(path = %path.display(), words = table.len(), "Loaded background table");
        Ok(table)
    }

    /// Parse a background table from any reader. `source` names the input in errors.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut entries = HashMap::new();

        for (i, record) in csv_reader.deserialize::<BackgroundRecord>().enumerate() {
            // Header is line 1
            let line = i + 2;
            let record = record
                .map_err(|e| AnalysisError::background(source, format!("line {line}: {e}")))?;

            if !(0.0..=1.0).contains(&record.frequency) {
                return Err(AnalysisError::background(
                    source,
                    format!(
                        "line {line}: frequency {} for '{}' is outside [0, 1]",
                        record.frequency, record.word
                    ),
                ));
            }
            // Dividing by a subnormal rate overflows to infinity
            if record.frequency > 0.0 && !record.frequency.is_normal() {
                return Err(AnalysisError::background(
                    source,
                    format!(
                        "line {line}: frequency {:e} for '{}' is too small to compare against",
                        record.frequency, record.word
                    ),
                ));
            }

            // Later rows win, matching a plain dict build over the file.
            entries.insert(
                record.word,
                BackgroundEntry {
                    frequency: record.frequency,
                    occurrences: record.occurrences,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Build a table directly from entries (mainly for tests and callers
    /// holding background rates in memory).
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, BackgroundEntry)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(w, e)| (w.into(), e)).collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&BackgroundEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
