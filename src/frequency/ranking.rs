// Comparative ranking: observed word rates against background rates.
//
// For each candidate word we report how often it occurs in the corpus, its
// rate, and how that rate compares with the background corpus:
//
//   relative frequency     = frequency / background frequency
//   log relative frequency = ln(relative frequency)
//
// The log form is symmetric: twice the background rate gives +x, half the
// background rate gives -x. Words with no usable background rate (absent from
// the table, zero background frequency, or zero observed occurrences) get 0
// for relative, log relative, and background occurrences, as do rows whose
// ratio overflows. The log is only ever taken of a strictly positive, finite
// ratio.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use super::background::BackgroundTable;
use super::distribution::FrequencyDistribution;
use crate::error::{AnalysisError, Result};

/// One row of a ranked frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub word: String,
    /// Occurrences in the observed corpus
    pub occurrences: u64,
    /// Occurrences divided by total word-bag tokens
    pub frequency: f64,
    /// Observed frequency divided by background frequency (0 if no background signal)
    pub relative_frequency: f64,
    /// Natural log of `relative_frequency` (0 if no background signal)
    pub log_relative_frequency: f64,
    /// Occurrences in the background corpus (0 if absent)
    pub background_occurrences: u64,
}

/// Ordered rows produced by one ranking call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedTable {
    pub rows: Vec<RankedRow>,
}

impl RankedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&RankedRow> {
        self.rows.iter().find(|r| r.word == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedRow> {
        self.rows.iter()
    }
}

/// Rank the `n` most common words of the distribution against background.
///
/// The candidates are the top `n` words; excluded search terms among them are
/// skipped, so the table can hold fewer than `n` rows.
pub fn rank_top_n(
    distribution: &FrequencyDistribution,
    background: &BackgroundTable,
    excluded: &HashSet<String>,
    n: usize,
) -> Result<RankedTable> {
    let mut rows = Vec::with_capacity(n);
    for (word, occurrences) in distribution.most_common(n) {
        if excluded.contains(word) {
            continue;
        }
        rows.push(compare_word(word, occurrences, distribution, background)?);
    }
    debug!(candidates = n, rows = rows.len(), "Ranked top words");
    Ok(RankedTable { rows })
}

/// Rank an explicit list of words against background ("word vector" mode).
///
/// Rows follow the input order; duplicate words produce duplicate rows and
/// excluded search terms are skipped every time they appear.
pub fn rank_words<S: AsRef<str>>(
    distribution: &FrequencyDistribution,
    background: &BackgroundTable,
    excluded: &HashSet<String>,
    words: &[S],
) -> Result<RankedTable> {
    let mut rows = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        if excluded.contains(word) {
            continue;
        }
        rows.push(compare_word(word, distribution.count(word), distribution, background)?);
    }
    debug!(words = words.len(), rows = rows.len(), "Ranked word vector");
    Ok(RankedTable { rows })
}

fn compare_word(
    word: &str,
    occurrences: u64,
    distribution: &FrequencyDistribution,
    background: &BackgroundTable,
) -> Result<RankedRow> {
    let frequency = distribution.frequency(word);

    let signal = background
        .get(word)
        .filter(|entry| entry.frequency > 0.0 && occurrences > 0)
        .map(|entry| (frequency / entry.frequency, entry.occurrences))
        .filter(|&(ratio, _)| {
            let usable = ratio.is_finite();
            if !usable {
                warn!(word, ratio, "Relative frequency out of range, reporting no signal");
            }
            usable
        });

    let (relative_frequency, log_relative_frequency, background_occurrences) = match signal {
        Some((ratio, background_occurrences)) => {
            (ratio, log_ratio(word, ratio)?, background_occurrences)
        }
        None => (0.0, 0.0, 0),
    };

    Ok(RankedRow {
        word: word.to_string(),
        occurrences,
        frequency,
        relative_frequency,
        log_relative_frequency,
        background_occurrences,
    })
}

/// Natural log of a relative frequency; fails unless `ratio` is strictly
/// positive and finite.
pub fn log_ratio(word: &str, ratio: f64) -> Result<f64> {
    if ratio > 0.0 && ratio.is_finite() {
        Ok(ratio.ln())
    } else {
        Err(AnalysisError::NumericDomain {
            word: word.to_string(),
            ratio,
        })
    }
}
