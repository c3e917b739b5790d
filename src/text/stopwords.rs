// Stop-word filter: tokens excluded from the word bag.
//
// The default set combines the English list from the `stop-words` crate,
// every ASCII punctuation mark, and a handful of tokens that show up
// constantly in scraped tweets (retweet markers, URL fragments, clitics left
// behind by the tokenizer). Users grow the set after inspecting a ranked
// table, so insertion order is kept for display.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::error::{AnalysisError, Result};

/// Noise tokens common in tweet text that carry no topical signal.
pub const TWEET_NOISE: &[&str] = &[
    "rt", "RT", "via", "http", "n't", "'s", "...", "''", "'m", "--", "'ll", "'ve", "'re", "//www",
];

/// An ordered, growable set of excluded tokens.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    /// Tokens in the order they were added (duplicates allowed)
    words: Vec<String>,
    /// Membership index over `words`
    index: HashSet<String>,
}

impl StopWords {
    /// The default stop-word set used by a fresh analysis session.
    pub fn english_defaults() -> Self {
        let mut stop = Self::empty();
        for word in get(LANGUAGE::English) {
            stop.push(word);
        }
        for c in (0x21u8..0x7f).map(char::from).filter(char::is_ascii_punctuation) {
            stop.push(c.to_string());
        }
        for word in TWEET_NOISE {
            stop.push((*word).to_string());
        }
        stop
    }

    /// A filter that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from an explicit list. Empty entries are rejected.
    pub fn from_list(words: &[&str]) -> Result<Self> {
        let mut stop = Self::empty();
        stop.add_all(words.iter().copied())?;
        Ok(stop)
    }

    /// Append a single stop word.
    pub fn add(&mut self, word: &str) -> Result<()> {
        validate_term(word, "stop word")?;
        self.push(word.to_string());
        Ok(())
    }

    /// Append an ordered collection of stop words.
    ///
    /// The whole collection is validated before anything is appended, so a
    /// bad entry leaves the set untouched.
    pub fn add_all<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = validate_terms(words, "stop word")?;
        for word in words {
            self.push(word);
        }
        Ok(())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    /// Number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in insertion order. The most recently added words come last.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Drop every stop word from a token stream, keeping the rest in order.
    pub fn filter<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    fn push(&mut self, word: String) {
        self.index.insert(word.clone());
        self.words.push(word);
    }
}

/// Reject an empty term. `what` names the term kind in the error message.
pub(crate) fn validate_term(term: &str, what: &str) -> Result<()> {
    if term.is_empty() {
        return Err(AnalysisError::invalid(format!("{what} must not be empty")));
    }
    Ok(())
}

/// Validate a non-empty collection of non-empty terms, returning owned copies.
pub(crate) fn validate_terms<I, S>(terms: I, what: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let terms: Vec<String> = terms.into_iter().map(|t| t.as_ref().to_string()).collect();
    if terms.is_empty() {
        return Err(AnalysisError::invalid(format!("{what} list must not be empty")));
    }
    for term in &terms {
        validate_term(term, what)?;
    }
    Ok(terms)
}
