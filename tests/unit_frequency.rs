// Unit tests for the frequency layer through the public API.
//
// Covers distribution invariants, most-common ordering, background loading
// from disk, and the ranking engine's signal rules.

use std::collections::HashSet;
use std::io::Write;

use twords::frequency::background::{BackgroundEntry, BackgroundTable};
use twords::frequency::distribution::build_frequency_distribution;
use twords::frequency::ranking::{rank_top_n, rank_words};
use twords::AnalysisError;

fn bag(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

// ============================================================
// FrequencyDistribution: invariants
// ============================================================

#[test]
fn counts_sum_to_total() {
    let dist = build_frequency_distribution(&bag("a b c a b a d e e e e"));
    let sum: u64 = dist.iter().map(|(_, c)| c).sum();
    assert_eq!(sum, dist.total());
    assert_eq!(dist.total(), 11);
}

#[test]
fn frequency_is_count_over_total() {
    let dist = build_frequency_distribution(&bag("x y y z z z z"));
    for (word, count) in dist.iter() {
        let expected = count as f64 / 7.0;
        assert!((dist.frequency(word) - expected).abs() < 1e-12, "word {word}");
    }
    let freq_sum: f64 = dist.iter().map(|(w, _)| dist.frequency(w)).sum();
    assert!((freq_sum - 1.0).abs() < 1e-9);
}

#[test]
fn empty_bag_has_zero_frequencies() {
    let dist = build_frequency_distribution(&Vec::<String>::new());
    assert_eq!(dist.total(), 0);
    assert_eq!(dist.distinct(), 0);
    assert_eq!(dist.frequency("the"), 0.0);
}

#[test]
fn most_common_with_large_n_returns_everything_sorted() {
    let dist = build_frequency_distribution(&bag("delta alpha charlie bravo alpha charlie alpha echo"));
    let all = dist.most_common(100);
    assert_eq!(all.len(), dist.distinct());
    assert_eq!(
        all,
        vec![("alpha", 3), ("charlie", 2), ("bravo", 1), ("delta", 1), ("echo", 1)]
    );
}

// ============================================================
// BackgroundTable: file loading
// ============================================================

#[test]
fn background_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "word,occurrences,frequency").unwrap();
    writeln!(file, "the,1000,0.05").unwrap();
    writeln!(file, "refugees,12,0.000001").unwrap();
    file.flush().unwrap();

    let table = BackgroundTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("refugees").unwrap().occurrences, 12);
}

#[test]
fn background_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BackgroundTable::load(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
}

#[test]
fn background_header_only_is_empty_table() {
    let table = BackgroundTable::from_reader("word,occurrences,frequency\n".as_bytes(), "mem".as_ref()).unwrap();
    assert!(table.is_empty());
}

// ============================================================
// Ranking engine
// ============================================================

fn background() -> BackgroundTable {
    BackgroundTable::from_entries([
        ("the", BackgroundEntry { frequency: 0.05, occurrences: 1000 }),
        ("tax", BackgroundEntry { frequency: 0.001, occurrences: 20 }),
    ])
}

#[test]
fn background_example_gives_ln2() {
    // 10 of 100 tokens are "the"
    let mut words = vec!["the".to_string(); 10];
    words.extend((0..90).map(|i| format!("w{i}")));
    let dist = build_frequency_distribution(&words);

    let table = rank_top_n(&dist, &background(), &HashSet::new(), 1).unwrap();
    let row = table.get("the").unwrap();
    assert!((row.relative_frequency - 2.0).abs() < 1e-9);
    assert!((row.log_relative_frequency - 0.693).abs() < 1e-3);
    assert_eq!(row.background_occurrences, 1000);
}

#[test]
fn word_missing_from_background_still_listed() {
    let dist = build_frequency_distribution(&bag("obamacare obamacare obamacare obamacare obamacare tax"));
    let table = rank_top_n(&dist, &background(), &HashSet::new(), 10).unwrap();
    assert_eq!(table.len(), 2);
    let row = table.get("obamacare").unwrap();
    assert_eq!(row.occurrences, 5);
    assert_eq!(row.relative_frequency, 0.0);
    assert_eq!(row.log_relative_frequency, 0.0);
    assert_eq!(row.background_occurrences, 0);
}

#[test]
fn search_terms_never_appear_regardless_of_rank() {
    let dist = build_frequency_distribution(&bag("europe europe europe refugees refugees tax the"));
    let excluded: HashSet<String> = ["europe", "refugees"].iter().map(|s| s.to_string()).collect();

    for n in 0..6 {
        let table = rank_top_n(&dist, &background(), &excluded, n).unwrap();
        assert!(table.iter().all(|r| !excluded.contains(&r.word)), "n = {n}");
    }
    // Top 3 candidates are europe, refugees, tax -> only tax survives
    let table = rank_top_n(&dist, &background(), &excluded, 3).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].word, "tax");
}

#[test]
fn word_vector_duplicates_and_exclusions() {
    let dist = build_frequency_distribution(&bag("tax tax liberty"));
    let excluded: HashSet<String> = ["europe".to_string()].into();
    let table = rank_words(
        &dist,
        &background(),
        &excluded,
        &["tax", "europe", "liberty", "tax", "europe"],
    )
    .unwrap();
    let words: Vec<&str> = table.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["tax", "liberty", "tax"]);
    assert_eq!(table.rows[0], table.rows[2]);
}
