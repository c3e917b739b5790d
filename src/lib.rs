// Twords: word-frequency analysis of tweet corpora
//
// This is the library root. The pipeline runs text -> word bag -> frequency
// distribution -> ranked comparison against a background corpus; `session`
// ties the stages together.

pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod output;
pub mod session;
pub mod text;

pub use error::{AnalysisError, Result};
pub use session::Session;
