// Output formatting: terminal display and JSON export of ranked tables.

pub mod terminal;

use anyhow::Result;

use crate::frequency::ranking::RankedTable;

/// Serialize a ranked table as pretty JSON (an array of row objects).
pub fn table_to_json(table: &RankedTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so long emoji-laden tokens are safe.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
