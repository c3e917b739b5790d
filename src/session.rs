// Analysis session: all state for one word-frequency analysis.
//
// A session owns the background table, the stop-word and search-term lists,
// and the current corpus together with its derived word bag and frequency
// distribution. The derived state is rebuilt wholesale whenever the corpus or
// the stop words change, so it always reflects the current inputs. Ranking
// calls are read-only.

use std::collections::HashSet;
use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::frequency::background::BackgroundTable;
use crate::frequency::distribution::{build_frequency_distribution, FrequencyDistribution};
use crate::frequency::ranking::{rank_top_n, rank_words, RankedTable};
use crate::text::build_word_bag;
use crate::text::stopwords::{validate_term, validate_terms, StopWords};
use crate::text::tokenize::Tokenizer;

pub struct Session {
    background: BackgroundTable,
    stop_words: StopWords,
    tokenizer: Tokenizer,
    /// Query terms used to collect the corpus, in the order given
    search_terms: Vec<String>,
    excluded: HashSet<String>,
    corpus: Vec<String>,
    word_bag: Vec<String>,
    distribution: FrequencyDistribution,
}

impl Session {
    /// A session with the default English stop words and an empty corpus.
    pub fn new(background: BackgroundTable) -> Self {
        Self::with_stop_words(background, StopWords::english_defaults())
    }

    pub fn with_stop_words(background: BackgroundTable, stop_words: StopWords) -> Self {
        Self {
            background,
            stop_words,
            tokenizer: Tokenizer::default(),
            search_terms: Vec::new(),
            excluded: HashSet::new(),
            corpus: Vec::new(),
            word_bag: Vec::new(),
            distribution: FrequencyDistribution::default(),
        }
    }

    /// Swap the tokenizer. Rebuilds the word bag if a corpus is loaded.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self.excluded = self.search_terms.iter().map(|t| self.fold(t)).collect();
        self.rebuild();
        self
    }

    // ---- inputs ----

    /// Replace the corpus and rebuild the word bag and distribution.
    pub fn set_corpus(&mut self, documents: Vec<String>) {
        self.corpus = documents;
        self.rebuild();
    }

    /// Replace the search terms. Rejects an empty list or empty terms.
    pub fn set_search_terms<I, S>(&mut self, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = validate_terms(terms, "search term")?;
        self.excluded = terms.iter().map(|t| self.fold(t)).collect();
        self.search_terms = terms;
        Ok(())
    }

    pub fn add_search_term(&mut self, term: &str) -> Result<()> {
        validate_term(term, "search term")?;
        let folded = self.fold(term);
        self.excluded.insert(folded);
        self.search_terms.push(term.to_string());
        Ok(())
    }

    pub fn add_search_terms<I, S>(&mut self, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = validate_terms(terms, "search term")?;
        let folded: Vec<String> = terms.iter().map(|t| self.fold(t)).collect();
        self.excluded.extend(folded);
        self.search_terms.extend(terms);
        Ok(())
    }

    /// Add one stop word and rebuild the word bag.
    pub fn add_stop_word(&mut self, word: &str) -> Result<()> {
        let word = self.fold(word);
        self.stop_words.add(&word)?;
        self.rebuild();
        Ok(())
    }

    /// Add several stop words and rebuild the word bag.
    pub fn add_stop_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folded: Vec<String> = words.into_iter().map(|w| self.fold(w.as_ref())).collect();
        self.stop_words.add_all(folded)?;
        self.rebuild();
        Ok(())
    }

    // ---- analysis ----

    /// Ranked table of the `n` most common words, search terms omitted.
    pub fn word_freq_table(&self, n: usize) -> Result<RankedTable> {
        let start = Instant::now();
        let table = rank_top_n(&self.distribution, &self.background, &self.excluded, n)?;
        info!(
            rows = table.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Created word frequency table"
        );
        Ok(table)
    }

    /// Ranked table for a caller-chosen word list, search terms omitted.
    pub fn word_vector_table<S: AsRef<str>>(&self, words: &[S]) -> Result<RankedTable> {
        rank_words(&self.distribution, &self.background, &self.excluded, words)
    }

    /// Corpus documents containing `term` as a substring, for inspecting
    /// where an unexpected word comes from.
    pub fn documents_containing(&self, term: &str) -> Result<Vec<&str>> {
        validate_term(term, "term")?;
        Ok(self
            .corpus
            .iter()
            .filter(|doc| doc.contains(term))
            .map(String::as_str)
            .collect())
    }

    // ---- accessors ----

    pub fn background(&self) -> &BackgroundTable {
        &self.background
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn word_bag(&self) -> &[String] {
        &self.word_bag
    }

    pub fn distribution(&self) -> &FrequencyDistribution {
        &self.distribution
    }

    /// Bring a user-supplied term to the tokenizer's case, so it can match
    /// the tokens it is compared with.
    fn fold(&self, term: &str) -> String {
        if self.tokenizer.lowercase {
            term.to_lowercase()
        } else {
            term.to_string()
        }
    }

    fn rebuild(&mut self) {
        let start = Instant::now();
        self.word_bag = build_word_bag(&self.corpus, &self.tokenizer, &self.stop_words);
        self.distribution = build_frequency_distribution(&self.word_bag);
        info!(
            documents = self.corpus.len(),
            words = self.distribution.total(),
            distinct = self.distribution.distinct(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rebuilt word bag"
        );
    }
}
