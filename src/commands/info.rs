//! Catalog summary command

use crate::catalog::WordCatalog;
use std::path::{Path, PathBuf};

/// Summary of a catalog for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogInfo {
    pub path: PathBuf,
    pub word_count: usize,
    pub max_word_length: usize,
    /// RFC 3339 timestamp of the last save, if the catalog was ever saved
    pub last_updated: Option<String>,
    /// Target lengths the catalog can answer
    pub possible_lengths: Vec<usize>,
}

#[must_use]
pub fn catalog_info(catalog: &WordCatalog, path: &Path) -> CatalogInfo {
    CatalogInfo {
        path: path.to_path_buf(),
        word_count: catalog.len(),
        max_word_length: catalog.max_word_length(),
        last_updated: catalog.last_updated().map(|stamp| stamp.to_rfc3339()),
        possible_lengths: catalog.possible_lengths(),
    }
}
