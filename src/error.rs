// Error types for the analysis core.
//
// Every fallible library operation returns `AnalysisError`. The binary wraps
// these in anyhow for user-facing context.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while building or ranking word frequencies.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Malformed caller input, e.g. an empty stop word or an empty term list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A logarithm was requested for a ratio that is not strictly positive and finite.
    #[error("numeric domain error: cannot take ln of relative frequency {ratio} for '{word}'")]
    NumericDomain { word: String, ratio: f64 },

    /// The background table file could not be parsed.
    #[error("background table {path}: {message}")]
    Background { path: PathBuf, message: String },

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn background(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Background {
            path: path.into(),
            message: message.into(),
        }
    }
}
