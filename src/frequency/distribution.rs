// Frequency distribution over a word bag.
//
// Built fresh from the word bag every time the corpus changes; never updated
// in place.

use std::cmp::Reverse;
use std::collections::HashMap;

/// Occurrence counts for each distinct word in a word bag.
#[derive(Debug, Clone, Default)]
pub struct FrequencyDistribution {
    counts: HashMap<String, u64>,
    total: u64,
}

/// Count every word in the bag.
pub fn build_frequency_distribution<S: AsRef<str>>(word_bag: &[S]) -> FrequencyDistribution {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for word in word_bag {
        let word = word.as_ref();
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_string(), 1);
            }
        }
    }
    FrequencyDistribution {
        counts,
        total: word_bag.len() as u64,
    }
}

impl FrequencyDistribution {
    /// Occurrences of `word`, zero if it never appears.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// `count(word) / total`. An empty distribution yields 0.0 for every word.
    pub fn frequency(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }

    /// Total tokens counted (the word bag length).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The `n` most frequent words, by descending count with ties broken
    /// lexicographically on the word.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        ranked.sort_unstable_by_key(|&(word, count)| (Reverse(count), word));
        ranked.truncate(n);
        ranked
    }

    /// Iterate over (word, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}
