//! Command implementations
//!
//! Each command drives the library core and returns a plain result struct;
//! printing lives in [`crate::output`]. This layer is the only one that logs.

pub mod info;
pub mod ingest;
pub mod interactive;
pub mod search;

pub use info::{CatalogInfo, catalog_info};
pub use ingest::{SourceReport, expand_sources, ingest_sources};
pub use interactive::{Reply, Session, run_interactive};
pub use search::{SearchError, SearchOutcome, SearchRequest, run_search};

use crate::catalog::{LoadError, WordCatalog};
use std::path::Path;
use tracing::{debug, info};

/// Load the catalog at `path`, or start an empty one if the file doesn't exist
///
/// # Errors
/// Returns the `LoadError` of an existing but unreadable catalog.
pub fn open_catalog(path: &Path) -> Result<WordCatalog, LoadError> {
    let mut catalog = WordCatalog::new();

    if path.exists() {
        catalog.load(path)?;
        info!(
            path = %path.display(),
            words = catalog.len(),
            max_length = catalog.max_word_length(),
            "Loaded catalog"
        );
    } else {
        debug!(path = %path.display(), "No catalog file yet, starting empty");
    }

    Ok(catalog)
}
