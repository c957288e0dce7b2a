//! Configuration file support
//!
//! Settings are read from a TOML file; every key is optional.
//!
//! ```
//! use word_finder::config::FinderConfig;
//!
//! let config = FinderConfig::from_toml_str(r#"
//!     catalog_path = "lists/english.json"
//!     reject_triple_runs = true
//! "#).unwrap();
//!
//! assert!(config.reject_triple_runs);
//! assert_eq!(config.default_target_length, 5);
//! ```

use crate::catalog::IngestPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default catalog file name
pub const DEFAULT_CATALOG_FILE: &str = "word_finder_word_list.json";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FinderConfig {
    /// Where the persisted catalog lives
    pub catalog_path: PathBuf,

    /// Skip words with three identical letters in a row during ingestion
    pub reject_triple_runs: bool,

    /// Target length used when a search doesn't give one
    pub default_target_length: usize,

    /// Maximum number of results to print; `None` prints all
    pub result_limit: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            reject_triple_runs: false,
            default_target_length: 5,
            result_limit: None,
        }
    }
}

impl FinderConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Returns error only if an existing file can't be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not valid TOML for this schema.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// The ingestion policy these settings describe
    #[must_use]
    pub const fn ingest_policy(&self) -> IngestPolicy {
        IngestPolicy {
            reject_triple_runs: self.reject_triple_runs,
        }
    }

    /// Overrides the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }
}
