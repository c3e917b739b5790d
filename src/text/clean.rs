// Tweet text cleaning applied before the word bag is built.
//
// Scraped tweets are noisy: URLs split into junk tokens, the same tweet shows
// up several times across overlapping collection windows, and stray symbols
// pollute the counts. Each step here is a plain function over the text list;
// `clean_corpus` chains the ones selected in `CleanOptions`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::info;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)\S+|\b[a-z0-9.-]+\.(?:com|net|org|ly|co)/\S*")
        .expect("URL pattern is valid")
});

/// Which cleaning steps to run, in pipeline order.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub lowercase: bool,
    pub remove_urls: bool,
    pub remove_punctuation: bool,
    pub ascii_only: bool,
    pub drop_duplicates: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_urls: true,
            remove_punctuation: false,
            ascii_only: false,
            drop_duplicates: true,
        }
    }
}

impl CleanOptions {
    /// Bring filter terms to the case of the cleaned text, so
    /// `keep_containing`/`drop_containing` still match after lowercasing.
    pub fn fold_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        terms
            .iter()
            .map(|t| {
                if self.lowercase {
                    t.as_ref().to_lowercase()
                } else {
                    t.as_ref().to_string()
                }
            })
            .collect()
    }
}

/// Run the selected cleaning steps over a corpus.
pub fn clean_corpus(texts: Vec<String>, options: &CleanOptions) -> Vec<String> {
    let before = texts.len();

    let mut texts: Vec<String> = texts
        .into_iter()
        .map(|mut text| {
            if options.lowercase {
                text = text.to_lowercase();
            }
            if options.remove_urls {
                text = remove_urls(&text);
            }
            if options.remove_punctuation {
                text = remove_punctuation(&text);
            }
            if options.ascii_only {
                text = keep_printable_ascii(&text);
            }
            text
        })
        .collect();

    if options.drop_duplicates {
        texts = drop_duplicates(texts);
    }

    info!(before, after = texts.len(), "Cleaned corpus");
    texts
}

/// Strip URLs (and bare link-shortener domains) from a tweet.
pub fn remove_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").trim().to_string()
}

/// Remove ASCII punctuation characters.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Keep only printable ASCII (space through tilde).
pub fn keep_printable_ascii(text: &str) -> String {
    text.chars().filter(|c| (' '..='~').contains(c)).collect()
}

/// Drop repeated texts, keeping the first instance of each.
pub fn drop_duplicates(texts: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    texts.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

/// Keep only texts containing at least one of `terms` as a substring.
pub fn keep_containing<S: AsRef<str>>(texts: Vec<String>, terms: &[S]) -> Vec<String> {
    texts
        .into_iter()
        .filter(|t| terms.iter().any(|term| t.contains(term.as_ref())))
        .collect()
}

/// Drop texts containing any of `terms` as a substring (e.g. "rt @" for retweets).
pub fn drop_containing<S: AsRef<str>>(texts: Vec<String>, terms: &[S]) -> Vec<String> {
    texts
        .into_iter()
        .filter(|t| !terms.iter().any(|term| t.contains(term.as_ref())))
        .collect()
}
