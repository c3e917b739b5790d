// Text processing: cleaning, tokenization, and stop-word filtering.

pub mod clean;
pub mod stopwords;
pub mod tokenize;

use tracing::debug;

use self::stopwords::StopWords;
use self::tokenize::Tokenizer;

/// Tokenize a corpus and drop stop words, producing the word bag.
///
/// The word bag keeps every retained token in document order; it is the
/// only input the frequency distribution is built from.
pub fn build_word_bag<S: AsRef<str>>(
    documents: &[S],
    tokenizer: &Tokenizer,
    stop_words: &StopWords,
) -> Vec<String> {
    let tokens = tokenizer.tokenize_documents(documents);
    let token_count = tokens.len();
    let word_bag = stop_words.filter(tokens);
    debug!(
        documents = documents.len(),
        tokens = token_count,
        retained = word_bag.len(),
        "Built word bag"
    );
    word_bag
}
