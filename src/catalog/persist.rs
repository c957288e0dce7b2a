//! Persisted catalog document
//!
//! The catalog is stored as one self-describing JSON document:
//!
//! ```json
//! {
//!   "count": 3,
//!   "lastUpdated": "2026-10-18T09:15:02.123+02:00",
//!   "words": [ { "text": "apple" }, { "text": "crane" }, { "text": "zebra" } ]
//! }
//! ```
//!
//! `count` and `lastUpdated` are required on load. `count` is informational
//! only; the word list and the longest-word length are always rebuilt from the
//! `words` entries.

use super::{CatalogError, WordCatalog, non_blank};
use crate::core::Word;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat, SubsecRound};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

pub const COUNT_FIELD: &str = "count";
pub const LAST_UPDATED_FIELD: &str = "lastUpdated";
pub const WORDS_FIELD: &str = "words";
pub const TEXT_FIELD: &str = "text";

/// Errors from loading a persisted catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File path can't be empty")]
    EmptyPath,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Catalog is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("The catalog attribute \"{0}\" does not exist")]
    MissingField(&'static str),
    #[error("The catalog attribute \"{field}\" has an unusable value {value}")]
    MalformedField { field: &'static str, value: String },
}

impl From<CatalogError> for LoadError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::EmptyPath => Self::EmptyPath,
            CatalogError::Io(e) => Self::Io(e),
        }
    }
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    count: usize,
    #[serde(rename = "lastUpdated")]
    last_updated: String,
    words: Vec<WordEntry<'a>>,
}

#[derive(Serialize)]
struct WordEntry<'a> {
    text: &'a str,
}

impl WordCatalog {
    /// Save the catalog to a file
    ///
    /// Sorts the words and stamps `last_updated` with the current local time
    /// once the document is written.
    ///
    /// # Errors
    /// - `CatalogError::EmptyPath` for a blank path
    /// - `CatalogError::Io` if the file can't be created or written
    pub fn save(&mut self, destination: impl AsRef<Path>) -> Result<(), CatalogError> {
        let destination = non_blank(destination.as_ref())?;
        let file = File::create(destination)?;
        let mut writer = BufWriter::new(file);
        self.save_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the persisted document to any writer
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn save_to_writer<W: Write>(&mut self, writer: W) -> io::Result<()> {
        self.sort();
        let stamp = Local::now().fixed_offset().trunc_subsecs(3);

        let document = CatalogDocument {
            count: self.len(),
            last_updated: stamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            words: self
                .iter()
                .map(|w| WordEntry { text: w.text() })
                .collect(),
        };

        serde_json::to_writer_pretty(writer, &document)?;
        self.set_last_updated(stamp);
        Ok(())
    }

    /// Replace the catalog contents with a persisted document
    ///
    /// The catalog is cleared first and stays empty if loading fails.
    ///
    /// # Errors
    /// - `LoadError::EmptyPath` for a blank path
    /// - `LoadError::Io` if the file can't be read
    /// - `LoadError::Syntax` if the file is not JSON
    /// - `LoadError::MissingField` if `count` or `lastUpdated` is absent
    /// - `LoadError::MalformedField` if a field can't be parsed
    pub fn load(&mut self, source: impl AsRef<Path>) -> Result<(), LoadError> {
        self.clear();
        self.last_updated = None;

        let source = non_blank(source.as_ref())?;
        let file = File::open(source)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Replace the catalog contents with a document read from `reader`
    ///
    /// # Errors
    /// See [`load`](Self::load).
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        self.clear();
        self.last_updated = None;

        let result = serde_json::from_reader(reader)
            .map_err(LoadError::from)
            .and_then(|document: Value| self.populate(&document));

        if result.is_err() {
            self.clear();
            self.last_updated = None;
        }
        result
    }

    fn populate(&mut self, document: &Value) -> Result<(), LoadError> {
        let count = document
            .get(COUNT_FIELD)
            .ok_or(LoadError::MissingField(COUNT_FIELD))?;
        if count.as_u64().is_none() {
            return Err(malformed(COUNT_FIELD, count));
        }

        let stamp = document
            .get(LAST_UPDATED_FIELD)
            .ok_or(LoadError::MissingField(LAST_UPDATED_FIELD))?;
        let stamp = stamp
            .as_str()
            .and_then(|s| DateTime::<FixedOffset>::parse_from_rfc3339(s.trim()).ok())
            .ok_or_else(|| malformed(LAST_UPDATED_FIELD, stamp))?;

        let entries = match document.get(WORDS_FIELD) {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(other) => return Err(malformed(WORDS_FIELD, other)),
        };

        for entry in entries {
            let text = entry
                .get(TEXT_FIELD)
                .and_then(Value::as_str)
                .map_or("", str::trim);

            if text.is_empty() {
                continue;
            }

            let word = Word::new(text).map_err(|_| malformed(TEXT_FIELD, entry))?;
            self.push_unsorted(word);
        }

        self.set_last_updated(stamp);
        self.sort();
        Ok(())
    }
}

fn malformed(field: &'static str, value: &Value) -> LoadError {
    LoadError::MalformedField {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IngestPolicy;
    use std::io::Cursor;

    fn load_str(json: &str) -> (WordCatalog, Result<(), LoadError>) {
        let mut catalog = WordCatalog::from_words(["stale", "words"]);
        let result = catalog.load_from_reader(Cursor::new(json));
        (catalog, result)
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut original = WordCatalog::new();
        original.ingest_lines(["zebra", "Apple", "crane", "kiwi"], IngestPolicy::default());

        let mut buffer = Vec::new();
        original.save_to_writer(&mut buffer).unwrap();

        let mut loaded = WordCatalog::new();
        loaded.load_from_reader(Cursor::new(&buffer)).unwrap();

        assert_eq!(loaded.words(), original.words());
        assert_eq!(loaded.max_word_length(), 5);
        assert_eq!(loaded.last_updated(), original.last_updated());
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_leaves_timestamp_unset() {
        let mut catalog = WordCatalog::from_words(["pear", "apple"]);

        assert!(catalog.save_to_writer(BrokenWriter).is_err());
        assert!(catalog.last_updated().is_none());
    }

    #[test]
    fn save_writes_count_and_timestamp() {
        let mut catalog = WordCatalog::from_words(["pear", "apple"]);
        assert!(catalog.last_updated().is_none());

        let mut buffer = Vec::new();
        catalog.save_to_writer(&mut buffer).unwrap();
        let document: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(document[COUNT_FIELD], 2);
        assert!(document[LAST_UPDATED_FIELD].as_str().is_some());
        assert_eq!(document[WORDS_FIELD][0][TEXT_FIELD], "apple");
        assert_eq!(document[WORDS_FIELD][1][TEXT_FIELD], "pear");
        assert!(catalog.last_updated().is_some());
    }

    #[test]
    fn load_recomputes_max_length_and_sorts() {
        let json = r#"{
            "count": 99,
            "lastUpdated": "2024-03-01T10:00:00+01:00",
            "maxWordLength": 2,
            "words": [ {"text": "Zebra"}, {"text": "ant"}, {"text": "  "}, {"text": "zebra"}, {} ]
        }"#;
        let (catalog, result) = load_str(json);

        result.unwrap();
        let texts: Vec<&str> = catalog.iter().map(Word::text).collect();
        assert_eq!(texts, ["ant", "zebra"]);
        assert_eq!(catalog.max_word_length(), 5);
        assert_eq!(
            catalog.last_updated().unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+01:00"
        );
    }

    #[test]
    fn load_missing_count() {
        let (catalog, result) = load_str(r#"{"lastUpdated": "2024-03-01T10:00:00Z", "words": []}"#);
        assert!(matches!(result, Err(LoadError::MissingField(COUNT_FIELD))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_missing_timestamp() {
        let (catalog, result) = load_str(r#"{"count": 1, "words": [{"text": "ant"}]}"#);
        assert!(matches!(
            result,
            Err(LoadError::MissingField(LAST_UPDATED_FIELD))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_malformed_count() {
        let (catalog, result) =
            load_str(r#"{"count": "many", "lastUpdated": "2024-03-01T10:00:00Z"}"#);
        match result {
            Err(LoadError::MalformedField { field, value }) => {
                assert_eq!(field, COUNT_FIELD);
                assert_eq!(value, "\"many\"");
            }
            other => panic!("expected MalformedField, got {other:?}"),
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_malformed_timestamp() {
        let (_, result) = load_str(r#"{"count": 0, "lastUpdated": "last tuesday"}"#);
        assert!(matches!(
            result,
            Err(LoadError::MalformedField {
                field: LAST_UPDATED_FIELD,
                ..
            })
        ));
    }

    #[test]
    fn load_invalid_word_leaves_catalog_empty() {
        let json = r#"{
            "count": 2,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "words": [ {"text": "ant"}, {"text": "b4d"} ]
        }"#;
        let (catalog, result) = load_str(json);

        assert!(matches!(
            result,
            Err(LoadError::MalformedField {
                field: TEXT_FIELD,
                ..
            })
        ));
        assert!(catalog.is_empty());
        assert_eq!(catalog.max_word_length(), 0);
        assert!(catalog.last_updated().is_none());
    }

    #[test]
    fn load_not_json() {
        let (catalog, result) = load_str("<d c=\"1\"/>");
        assert!(matches!(result, Err(LoadError::Syntax(_))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_without_words_is_empty_catalog() {
        let (catalog, result) = load_str(r#"{"count": 0, "lastUpdated": "2024-03-01T10:00:00Z"}"#);
        result.unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.last_updated().is_some());
    }

    #[test]
    fn save_and_load_reject_blank_paths() {
        let mut catalog = WordCatalog::new();
        assert!(matches!(catalog.save(""), Err(CatalogError::EmptyPath)));
        assert!(matches!(catalog.load(" "), Err(LoadError::EmptyPath)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let mut catalog = WordCatalog::from_words(["crane"]);
        let result = catalog.load("/no/such/catalog.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn save_and_load_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut catalog = WordCatalog::from_words(["slate", "crane", "Irate"]);
        catalog.save(&path).unwrap();

        let mut loaded = WordCatalog::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.words(), catalog.words());
    }
}
