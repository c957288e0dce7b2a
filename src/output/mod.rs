//! Terminal output formatting
//!
//! Display utilities for CLI results and status lines.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_info, print_ingest_reports, print_search_outcome};
