//! End-to-end: ingest word lists, save, reload, and search

use std::fs;
use word_finder::catalog::{IngestPolicy, LoadError, WordCatalog};
use word_finder::commands::{
    SearchRequest, expand_sources, ingest_sources, open_catalog, run_search,
};
use word_finder::core::Word;
use word_finder::matcher::{ConstraintSet, MatchEngine};

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

#[test]
fn ingest_save_load_search() {
    let dir = tempfile::tempdir().unwrap();
    let lists = dir.path().join("lists");
    fs::create_dir(&lists).unwrap();
    fs::write(lists.join("a.txt"), "Crane\r\nbrake\nslate\n\nsl8te\n").unwrap();
    fs::write(lists.join("b.txt"), "crane\nzebra\ncab\nbooook\n").unwrap();

    let mut catalog = WordCatalog::new();
    let sources = expand_sources(&[lists]).unwrap();
    let reports = ingest_sources(&mut catalog, &sources, IngestPolicy::default(), false).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!((reports[0].report.added, reports[0].report.skipped), (3, 1));
    assert_eq!((reports[1].report.added, reports[1].report.skipped), (3, 1));

    let path = dir.path().join("catalog.json");
    catalog.save(&path).unwrap();
    assert_eq!(
        texts(catalog.words()),
        ["booook", "brake", "cab", "crane", "slate", "zebra"]
    );

    let reloaded = open_catalog(&path).unwrap();
    assert_eq!(reloaded.words(), catalog.words());
    assert_eq!(reloaded.max_word_length(), 6);
    assert_eq!(reloaded.last_updated(), catalog.last_updated());

    let request = SearchRequest {
        pattern: Some("??a?e".to_string()),
        exclude: Some("s".to_string()),
        ..SearchRequest::default()
    };
    let constraints = request.to_constraints(5).unwrap();
    let mut engine = MatchEngine::new();
    let outcome = run_search(&mut engine, &reloaded, &constraints).unwrap();

    assert_eq!(texts(&outcome.result.words), ["brake", "crane"]);
    assert_eq!(outcome.status(), "There are 2 results.");
}

#[test]
fn triple_runs_rejected_when_asked() {
    let mut catalog = WordCatalog::new();
    let report = catalog.ingest_lines(["booook", "book"], IngestPolicy::rejecting_triple_runs());
    assert_eq!((report.added, report.skipped), (1, 1));
}

#[test]
fn results_are_a_subset_and_respect_every_constraint() {
    let catalog = WordCatalog::from_words([
        "crane", "crate", "trace", "react", "cater", "caret", "slate", "brake", "cab",
    ]);

    let mut constraints = ConstraintSet::new(5).unwrap();
    constraints.set_positional_letter(0, 'c').unwrap();
    constraints.included = "te".parse().unwrap();
    constraints.excluded = "n".parse().unwrap();

    let mut engine = MatchEngine::new();
    let result = engine.search(&catalog, &constraints).unwrap();

    assert_eq!(texts(&result.words), ["caret", "cater", "crate"]);
    for word in &result.words {
        assert!(catalog.contains(word.text()));
        assert_eq!(word.len(), 5);
        assert!(word.text().starts_with('c'));
        assert!(word.text().contains('t') && word.text().contains('e'));
        assert!(!word.text().contains('n'));
    }
}

#[test]
fn corrupt_catalog_reports_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"count": 1, "lastUpdated": "yesterday", "words": [{"text": "crane"}]}"#,
    )
    .unwrap();

    let mut catalog = WordCatalog::from_words(["slate"]);
    let err = catalog.load(&path).unwrap_err();
    assert!(matches!(err, LoadError::MalformedField { field: "lastUpdated", .. }));
    assert!(catalog.is_empty());
}
