// Composition tests: the full pipeline through a Session.
//
//   corpus file -> clean -> word bag -> distribution -> ranked table -> JSON
//
// Files are written to temp directories; no other side effects.

use std::fs;

use twords::corpus::read_corpus;
use twords::frequency::background::{BackgroundEntry, BackgroundTable};
use twords::output::table_to_json;
use twords::text::clean::{clean_corpus, CleanOptions};
use twords::text::stopwords::StopWords;
use twords::Session;

fn tweets() -> Vec<String> {
    vec![
        "Europe must welcome refugees https://t.co/abc".to_string(),
        "Refugees in Europe need housing and food".to_string(),
        "Europe must welcome refugees https://t.co/abc".to_string(),
        "Housing shortage hits refugees hard".to_string(),
        "RT @news: refugees face long winter".to_string(),
    ]
}

fn background() -> BackgroundTable {
    BackgroundTable::from_entries([
        ("housing", BackgroundEntry { frequency: 0.0001, occurrences: 7200 }),
        ("winter", BackgroundEntry { frequency: 0.0005, occurrences: 36000 }),
        ("food", BackgroundEntry { frequency: 0.001, occurrences: 72000 }),
    ])
}

#[test]
fn cleaned_corpus_ranks_against_background() {
    let docs = clean_corpus(tweets(), &CleanOptions::default());
    assert_eq!(docs.len(), 4, "duplicate tweet should be dropped");

    let mut session = Session::new(background());
    session.set_search_terms(["europe", "refugees"]).unwrap();
    session.set_corpus(docs);

    let table = session.word_freq_table(20).unwrap();
    assert!(table.get("europe").is_none());
    assert!(table.get("refugees").is_none());
    assert!(table.iter().all(|r| !r.word.contains("t.co")));

    // housing appears twice; it outranks every single-occurrence word
    assert_eq!(table.rows[0].word, "housing");
    let housing = &table.rows[0];
    assert_eq!(housing.occurrences, 2);
    let expected = housing.frequency / 0.0001;
    assert!((housing.relative_frequency - expected).abs() < 1e-6);
    assert!(housing.log_relative_frequency > 0.0);
    assert_eq!(housing.background_occurrences, 7200);

    // Rows are sorted by descending occurrences
    assert!(table.rows.windows(2).all(|w| w[0].occurrences >= w[1].occurrences));
}

#[test]
fn word_vector_reports_fixed_axes() {
    let mut session = Session::new(background());
    session.set_search_terms(["refugees"]).unwrap();
    session.set_corpus(clean_corpus(tweets(), &CleanOptions::default()));

    let table = session
        .word_vector_table(&["food", "liberty", "refugees", "food"])
        .unwrap();
    let words: Vec<&str> = table.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["food", "liberty", "food"]);

    let liberty = &table.rows[1];
    assert_eq!(liberty.occurrences, 0);
    assert_eq!(liberty.frequency, 0.0);
    assert_eq!(liberty.log_relative_frequency, 0.0);

    // Ranking a word list leaves the session's own word bag alone
    let bag_len = session.word_bag().len();
    let _ = session.word_vector_table(&["housing"]).unwrap();
    assert_eq!(session.word_bag().len(), bag_len);
}

#[test]
fn adding_stop_words_changes_next_table() {
    let mut session = Session::with_stop_words(background(), StopWords::english_defaults());
    session.set_corpus(clean_corpus(tweets(), &CleanOptions::default()));
    assert!(session.word_freq_table(50).unwrap().get("housing").is_some());

    session.add_stop_words(["housing", "shortage"]).unwrap();
    let table = session.word_freq_table(50).unwrap();
    assert!(table.get("housing").is_none());
    assert!(table.get("shortage").is_none());
    let recent: Vec<&str> = session.stop_words().iter().rev().take(2).collect();
    assert_eq!(recent, vec!["shortage", "housing"]);
}

#[test]
fn empty_corpus_produces_empty_table() {
    let mut session = Session::new(background());
    session.set_corpus(Vec::new());
    assert!(session.word_freq_table(10).unwrap().is_empty());
    let table = session.word_vector_table(&["food"]).unwrap();
    assert_eq!(table.rows[0].frequency, 0.0);
    assert_eq!(table.rows[0].relative_frequency, 0.0);
}

#[test]
fn files_to_json_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = dir.path().join("tweets.txt");
    let background_path = dir.path().join("background.csv");
    fs::write(&corpus_path, "taxes are too high\n\nlower taxes now\n").unwrap();
    fs::write(
        &background_path,
        "word,occurrences,frequency\ntaxes,500,0.0002\nhigh,9000,0.004\n",
    )
    .unwrap();

    let background = BackgroundTable::load(&background_path).unwrap();
    let mut session = Session::new(background);
    session.set_corpus(read_corpus(&corpus_path).unwrap());

    let table = session.word_freq_table(5).unwrap();
    let json = table_to_json(&table).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(rows[0]["word"], "taxes");
    assert_eq!(rows[0]["occurrences"], 2);
    assert_eq!(rows[0]["background_occurrences"], 500);
    assert!(rows[0]["log_relative_frequency"].as_f64().unwrap() > 0.0);
}
