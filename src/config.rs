use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default number of words in a ranked table.
pub const DEFAULT_TOP_N: usize = 50;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value can be overridden by the matching CLI flag.
#[derive(Debug, Clone)]
pub struct Config {
    /// Background word-rate CSV (TWORDS_BACKGROUND_PATH)
    pub background_path: PathBuf,
    /// Query terms used to collect the corpus (TWORDS_SEARCH_TERMS, comma-separated)
    pub search_terms: Vec<String>,
    /// Stop words added on top of the defaults (TWORDS_STOP_WORDS, comma-separated)
    pub extra_stop_words: Vec<String>,
    /// Table size for `analyze` (TWORDS_TOP_N)
    pub top_n: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_n = match env::var("TWORDS_TOP_N") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("TWORDS_TOP_N must be a non-negative integer, got '{raw}'"))?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self {
            background_path: env::var("TWORDS_BACKGROUND_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./background.csv")),
            search_terms: split_list(&env::var("TWORDS_SEARCH_TERMS").unwrap_or_default()),
            extra_stop_words: split_list(&env::var("TWORDS_STOP_WORDS").unwrap_or_default()),
            top_n,
        })
    }

    /// Check that the background table file exists.
    /// Call this before any operation that ranks against background rates.
    pub fn require_background(&self) -> Result<()> {
        if !self.background_path.exists() {
            anyhow::bail!(
                "Background table not found at {}\n\
                 Set TWORDS_BACKGROUND_PATH in your .env file or pass --background.",
                self.background_path.display()
            );
        }
        Ok(())
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
