// Treebank-style word tokenizer for tweet text.
//
// Each whitespace chunk is cut at Unicode word boundaries, then the segments
// are regrouped the way a Treebank tokenizer would. Hyphenated words and
// slash runs stay whole ("well-known", "//www.x.com"), dot and dash runs
// collapse to "..." and "--", and double quotes become `` or ''. Contractions
// are split into stem + clitic ("don't" -> "do", "n't") so the clitic lands on
// the stop-word list instead of inflating the counts of a fused form.

use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off after an apostrophe (compared case-insensitively).
const CLITICS: &[&str] = &["s", "m", "d", "ll", "re", "ve"];

/// Word tokenizer. Case-folds tokens unless built with `lowercase: false`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pub lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl Tokenizer {
    /// Tokenize a sequence of documents as one whitespace-joined stream.
    pub fn tokenize_documents<S: AsRef<str>>(&self, documents: &[S]) -> Vec<String> {
        let mut tokens = Vec::new();
        for doc in documents {
            self.tokenize_into(doc.as_ref(), &mut tokens);
        }
        tokens
    }

    /// Tokenize a single string.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.tokenize_into(text, &mut tokens);
        tokens
    }

    fn tokenize_into(&self, text: &str, out: &mut Vec<String>) {
        let start = out.len();
        for chunk in text.split_whitespace() {
            tokenize_chunk(chunk, out);
        }
        if self.lowercase {
            for token in &mut out[start..] {
                if token.chars().any(char::is_uppercase) {
                    *token = token.to_lowercase();
                }
            }
        }
    }
}

fn tokenize_chunk(chunk: &str, out: &mut Vec<String>) {
    let folded = fold_punctuation(chunk);
    let segments: Vec<&str> = folded.split_word_bounds().collect();
    let mut i = 0;

    while i < segments.len() {
        let segment = segments[i];

        if is_word(segment) || segment == "/" {
            let (word, next) = glue_word(&segments, i);
            push_word(&word, out);
            i = next;
            continue;
        }

        match segment {
            "." => {
                let run = run_length(&segments, i);
                if run >= 3 {
                    out.push("...".to_string());
                } else {
                    out.extend(std::iter::repeat(".".to_string()).take(run));
                }
                i += run;
            }
            "-" if segments.get(i + 1) == Some(&"-") => {
                out.push("--".to_string());
                i += run_length(&segments, i);
            }
            // A clitic with nothing before it in the chunk: "'s", "'ll"
            "'" if segments.get(i + 1).is_some_and(|s| is_clitic(s)) => {
                out.push(format!("'{}", segments[i + 1]));
                i += 2;
            }
            "\"" => {
                let opening = i == 0 || matches!(segments[i - 1], "(" | "[" | "{" | "<");
                out.push(if opening { "``" } else { "''" }.to_string());
                i += 1;
            }
            _ => {
                if !segment.chars().all(char::is_control) {
                    out.push(segment.to_string());
                }
                i += 1;
            }
        }
    }
}

/// Grow the word starting at `start` over adjacent word segments, slashes,
/// and hyphens that sit between two words. Returns the word and the index
/// of the first segment after it.
fn glue_word(segments: &[&str], start: usize) -> (String, usize) {
    let mut word = segments[start].to_string();
    let mut i = start + 1;

    while let Some(&segment) = segments.get(i) {
        if is_word(segment) || segment == "/" {
            word.push_str(segment);
            i += 1;
        } else if segment == "-" && segments.get(i + 1).is_some_and(|s| is_word(s)) {
            word.push('-');
            word.push_str(segments[i + 1]);
            i += 2;
        } else {
            break;
        }
    }
    (word, i)
}

/// Word segments start with a letter, digit, or underscore. Ideographic
/// scripts segment per character, so adjacent word segments are rejoined.
fn is_word(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn is_clitic(segment: &str) -> bool {
    CLITICS.iter().any(|c| segment.eq_ignore_ascii_case(c))
}

fn run_length(segments: &[&str], start: usize) -> usize {
    let first = segments[start];
    segments[start..].iter().take_while(|&&s| s == first).count()
}

/// Fold typographic quotes and the ellipsis character to ASCII.
fn fold_punctuation(chunk: &str) -> String {
    let mut folded = String::with_capacity(chunk.len());
    for c in chunk.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => folded.push('\''),
            '\u{201C}' | '\u{201D}' => folded.push('"'),
            '\u{2026}' => folded.push_str("..."),
            _ => folded.push(c),
        }
    }
    folded
}

/// Push a word, splitting a trailing clitic into its own token.
fn push_word(word: &str, out: &mut Vec<String>) {
    match split_clitic(word) {
        Some((stem, clitic)) => {
            out.push(stem.to_string());
            out.push(clitic.to_string());
        }
        None => out.push(word.to_string()),
    }
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    if word.len() > 3 {
        if let Some(tail) = word.get(word.len() - 3..) {
            if tail.eq_ignore_ascii_case("n't") {
                return Some(word.split_at(word.len() - 3));
            }
        }
    }
    let pos = word.rfind('\'')?;
    let suffix = &word[pos + 1..];
    if pos > 0 && CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
        return Some(word.split_at(pos));
    }
    None
}
