//! Word catalog
//!
//! The catalog is the deduplicated, sorted collection of every known word.
//! Words come in through line-oriented ingestion and are persisted to a single
//! JSON document (see [`persist`]).

pub mod persist;

use crate::core::Word;
use chrono::{DateTime, FixedOffset};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

pub use persist::LoadError;

/// Smallest word length offered as a search target
pub const MIN_TARGET_LENGTH: usize = 3;

/// Errors from file-based ingestion and from saving
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File path can't be empty")]
    EmptyPath,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Rules applied to each line during ingestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestPolicy {
    /// Skip words with three identical letters in a row ("brrr", "zzz")
    pub reject_triple_runs: bool,
}

impl IngestPolicy {
    #[must_use]
    pub const fn rejecting_triple_runs() -> Self {
        Self {
            reject_triple_runs: true,
        }
    }
}

/// Outcome of one ingestion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub added: usize,
    pub skipped: usize,
    /// Set when a cancellation flag stopped the pass early
    pub cancelled: bool,
}

impl IngestReport {
    /// Total lines examined
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.added + self.skipped
    }
}

/// Ordered, deduplicated collection of words plus catalog metadata
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    max_word_length: usize,
    last_updated: Option<DateTime<FixedOffset>>,
}

impl WordCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from any words, skipping invalid ones and duplicates
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        catalog.ingest_lines(words, IngestPolicy::default());
        catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, 0 when empty
    #[must_use]
    pub const fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// When the catalog was last saved (or the timestamp it was loaded with)
    #[must_use]
    pub const fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        self.last_updated
    }

    /// Words in catalog order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    /// Case-sensitive membership test; only lower-case text can match
    #[must_use]
    pub fn contains_case_sensitive(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| w.text() == word && self.index.contains(&w))
    }

    /// Target lengths worth offering for this catalog (3 up to the longest word)
    #[must_use]
    pub fn possible_lengths(&self) -> Vec<usize> {
        (MIN_TARGET_LENGTH..=self.max_word_length).collect()
    }

    /// Insert a single word at its sorted position
    ///
    /// Returns false if an equal word (ignoring case) is already present.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        let at = self.words.binary_search(&word).unwrap_or_else(|at| at);
        self.max_word_length = self.max_word_length.max(word.len());
        self.index.insert(word.clone());
        self.words.insert(at, word);
        true
    }

    /// Append a word, leaving the order for a later [`sort`](Self::sort)
    pub(crate) fn push_unsorted(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.max_word_length = self.max_word_length.max(word.len());
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.index.clear();
        self.max_word_length = 0;
    }

    /// Restore the case-insensitive ascending order
    pub fn sort(&mut self) {
        // Words are stored lower-case, so byte order is case-insensitive order.
        self.words.sort_unstable();
    }

    /// Ingest one word per line
    ///
    /// A line is skipped (and counted) when it is empty, contains anything
    /// other than ASCII letters, breaks the policy, or is already present.
    /// The catalog is sorted once all lines are processed.
    ///
    /// # Examples
    /// ```
    /// use word_finder::catalog::{IngestPolicy, WordCatalog};
    ///
    /// let mut catalog = WordCatalog::new();
    /// let report = catalog.ingest_lines(["Crane", "crane", "it's"], IngestPolicy::default());
    /// assert_eq!((report.added, report.skipped), (1, 2));
    /// ```
    pub fn ingest_lines<I, S>(&mut self, lines: I, policy: IngestPolicy) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let never = AtomicBool::new(false);
        self.ingest_lines_cancellable(lines, policy, &never)
    }

    /// Like [`ingest_lines`](Self::ingest_lines), checking `cancel` between lines
    ///
    /// Words added before cancellation stay in the catalog.
    pub fn ingest_lines_cancellable<I, S>(
        &mut self,
        lines: I,
        policy: IngestPolicy,
        cancel: &AtomicBool,
    ) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = IngestReport::default();

        for line in lines {
            if cancel.load(Ordering::Relaxed) {
                report.cancelled = true;
                break;
            }

            if self.ingest_line(line.as_ref(), policy) {
                report.added += 1;
            } else {
                report.skipped += 1;
            }
        }

        self.sort();
        report
    }

    fn ingest_line(&mut self, line: &str, policy: IngestPolicy) -> bool {
        let Ok(word) = Word::new(line.trim_end_matches(['\r', '\n'])) else {
            return false;
        };

        if policy.reject_triple_runs && word.has_triple_run() {
            return false;
        }

        self.push_unsorted(word)
    }

    /// Ingest every line of a reader
    ///
    /// `\n`, `\r\n` and bare `\r` all end a line. Blank lines are ignored
    /// rather than counted as skipped. Bytes that aren't valid UTF-8 are
    /// replaced, so such a line fails validation and counts as skipped.
    ///
    /// # Errors
    /// Returns the first read error. Words added before it remain.
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        reader: R,
        policy: IngestPolicy,
    ) -> io::Result<IngestReport> {
        let mut first_error = None;

        let lines = reader
            .split(b'\n')
            .map_while(|line| match line {
                Ok(line) => Some(line),
                Err(e) => {
                    first_error = Some(e);
                    None
                }
            })
            .flat_map(|line| {
                line.split(|&b| b == b'\r')
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect::<Vec<_>>()
            });

        let report = self.ingest_lines(lines, policy);

        match first_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    /// Ingest a plain-text word list file
    ///
    /// # Errors
    /// - `CatalogError::EmptyPath` for a blank path
    /// - `CatalogError::Io` if the file can't be opened or read
    pub fn ingest_file(
        &mut self,
        path: impl AsRef<Path>,
        policy: IngestPolicy,
    ) -> Result<IngestReport, CatalogError> {
        let path = non_blank(path.as_ref())?;
        let file = File::open(path)?;
        Ok(self.ingest_reader(BufReader::new(file), policy)?)
    }

    pub(crate) fn set_last_updated(&mut self, stamp: DateTime<FixedOffset>) {
        self.last_updated = Some(stamp);
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

pub(crate) fn non_blank(path: &Path) -> Result<&Path, CatalogError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        Err(CatalogError::EmptyPath)
    } else {
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn texts(catalog: &WordCatalog) -> Vec<&str> {
        catalog.iter().map(Word::text).collect()
    }

    #[test]
    fn ingest_dedups_case_insensitively() {
        let mut catalog = WordCatalog::new();
        let report = catalog.ingest_lines(["Apple", "apple"], IngestPolicy::default());

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(texts(&catalog), ["apple"]);
    }

    #[test]
    fn ingest_skips_non_letter_lines() {
        let mut catalog = WordCatalog::new();
        let report = catalog.ingest_lines(
            ["hello2", "it's", "", "two words", "ok"],
            IngestPolicy::default(),
        );

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 4);
        assert!(!catalog.contains("hello2"));
        assert!(!catalog.contains("it's"));
        assert!(catalog.contains("OK"));
    }

    #[test]
    fn ingest_sorts_afterwards() {
        let mut catalog = WordCatalog::new();
        catalog.ingest_lines(["pear", "Apple", "mango"], IngestPolicy::default());
        catalog.ingest_lines(["banana", "Zucchini"], IngestPolicy::default());

        assert_eq!(
            texts(&catalog),
            ["apple", "banana", "mango", "pear", "zucchini"]
        );
    }

    #[test]
    fn ingest_triple_run_policy() {
        let lines = ["brrr", "bookkeeper", "zzz"];

        let mut lenient = WordCatalog::new();
        let report = lenient.ingest_lines(lines, IngestPolicy::default());
        assert_eq!(report.added, 3);

        let mut strict = WordCatalog::new();
        let report = strict.ingest_lines(lines, IngestPolicy::rejecting_triple_runs());
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(texts(&strict), ["bookkeeper"]);
    }

    #[test]
    fn ingest_tracks_max_length() {
        let mut catalog = WordCatalog::new();
        assert_eq!(catalog.max_word_length(), 0);

        catalog.ingest_lines(["cat", "elephant", "dog"], IngestPolicy::default());
        assert_eq!(catalog.max_word_length(), 8);
        assert_eq!(catalog.possible_lengths(), vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn possible_lengths_empty_for_short_words() {
        let catalog = WordCatalog::from_words(["a", "an"]);
        assert!(catalog.possible_lengths().is_empty());
    }

    #[test]
    fn ingest_cancellation_keeps_progress() {
        let mut catalog = WordCatalog::new();
        let cancel = AtomicBool::new(false);

        let lines = ["alpha", "bravo", "charlie", "delta"].into_iter().inspect(|w| {
            if *w == "charlie" {
                cancel.store(true, Ordering::Relaxed);
            }
        });
        let report = catalog.ingest_lines_cancellable(lines, IngestPolicy::default(), &cancel);

        assert!(report.cancelled);
        assert_eq!(report.added, 2);
        assert_eq!(texts(&catalog), ["alpha", "bravo"]);
    }

    #[test]
    fn ingest_reader_handles_line_endings() {
        let mut catalog = WordCatalog::new();
        let input = "crane\r\nslate\nirate\rgrate\n";
        let report = catalog
            .ingest_reader(Cursor::new(input), IngestPolicy::default())
            .unwrap();

        assert_eq!(report.added, 4);
        assert_eq!(report.skipped, 0);
        assert_eq!(texts(&catalog), ["crane", "grate", "irate", "slate"]);
    }

    #[test]
    fn ingest_reader_skips_undecodable_lines() {
        let mut catalog = WordCatalog::new();
        let input: &[u8] = b"crane\ncaf\xe9\nslate\n";
        let report = catalog
            .ingest_reader(Cursor::new(input), IngestPolicy::default())
            .unwrap();

        assert_eq!((report.added, report.skipped), (2, 1));
        assert_eq!(texts(&catalog), ["crane", "slate"]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk went away"))
        }
    }

    #[test]
    fn ingest_reader_keeps_words_read_before_an_error() {
        let mut catalog = WordCatalog::new();
        let reader = BufReader::new(Cursor::new("slate\ncrane\n").chain(FailingReader));

        let err = catalog
            .ingest_reader(reader, IngestPolicy::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "disk went away");
        assert_eq!(texts(&catalog), ["crane", "slate"]);
    }

    #[test]
    fn insert_keeps_sorted_order() {
        let mut catalog = WordCatalog::new();
        assert!(catalog.insert(Word::new("zebra").unwrap()));
        assert!(catalog.insert(Word::new("apple").unwrap()));
        assert!(catalog.insert(Word::new("mango").unwrap()));
        assert!(!catalog.insert(Word::new("Apple").unwrap()));

        assert_eq!(texts(&catalog), ["apple", "mango", "zebra"]);
        assert_eq!(catalog.max_word_length(), 5);
    }

    #[test]
    fn ingest_file_rejects_blank_path() {
        let mut catalog = WordCatalog::new();
        let result = catalog.ingest_file("   ", IngestPolicy::default());
        assert!(matches!(result, Err(CatalogError::EmptyPath)));
    }

    #[test]
    fn ingest_file_missing() {
        let mut catalog = WordCatalog::new();
        let result = catalog.ingest_file("/definitely/not/here.txt", IngestPolicy::default());
        match result {
            Err(CatalogError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn contains_respects_case_mode() {
        let catalog = WordCatalog::from_words(["Crane"]);
        assert!(catalog.contains("CRANE"));
        assert!(catalog.contains_case_sensitive("crane"));
        assert!(!catalog.contains_case_sensitive("Crane"));
        assert!(!catalog.contains("cranes"));
    }

    #[test]
    fn ingestion_can_run_on_worker_thread() {
        let mut catalog = WordCatalog::new();
        let handle = std::thread::spawn(move || {
            let report = catalog.ingest_lines(["crane", "slate"], IngestPolicy::default());
            (catalog, report)
        });
        let (catalog, report) = handle.join().unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(catalog.len(), 2);
    }
}
