//! Word list ingestion command
//!
//! Reads plain-text word lists (files or directories of `*.txt` files) into
//! a catalog, timing each source for the status line.

use crate::catalog::{CatalogError, IngestPolicy, IngestReport, WordCatalog};
use crate::output::formatters::ingest_status;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of ingesting one source file
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: PathBuf,
    pub report: IngestReport,
    pub elapsed: Duration,
    /// Catalog size after this source
    pub total: usize,
}

impl SourceReport {
    /// The status line for this source
    #[must_use]
    pub fn status(&self) -> String {
        let name = self.source.file_name().map_or_else(
            || self.source.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        ingest_status(&self.report, &name, self.elapsed, self.total)
    }
}

/// Replace directories by the `*.txt` files they contain
///
/// Files are kept in the order given; a directory's files are sorted by name.
///
/// # Errors
/// Returns `CatalogError::EmptyPath` for a blank path, or an I/O error if a
/// path doesn't exist or a directory can't be listed.
pub fn expand_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CatalogError> {
    let mut sources = Vec::new();

    for path in paths {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(CatalogError::EmptyPath);
        }
        if path.is_dir() {
            let mut files = text_files_in(path)?;
            files.sort();
            debug!(dir = %path.display(), files = files.len(), "Expanded directory");
            sources.extend(files);
        } else if path.is_file() {
            sources.push(path.clone());
        } else {
            return Err(CatalogError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("The word list file \"{}\" does not exist.", path.display()),
            )));
        }
    }

    Ok(sources)
}

/// Ingest each source in turn
///
/// With `show_progress`, a byte-based progress bar is drawn per file.
///
/// # Errors
/// Stops at the first unreadable source. Words from earlier sources (and
/// from the part of the failing file already read) stay in the catalog.
pub fn ingest_sources(
    catalog: &mut WordCatalog,
    sources: &[PathBuf],
    policy: IngestPolicy,
    show_progress: bool,
) -> Result<Vec<SourceReport>, CatalogError> {
    sources
        .iter()
        .map(|source| ingest_one(catalog, source, policy, show_progress))
        .collect()
}

fn ingest_one(
    catalog: &mut WordCatalog,
    source: &Path,
    policy: IngestPolicy,
    show_progress: bool,
) -> Result<SourceReport, CatalogError> {
    let file = File::open(source)?;
    let pb = if show_progress {
        progress_bar(file.metadata()?.len(), source)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let report = catalog.ingest_reader(BufReader::new(pb.wrap_read(file)), policy)?;
    let elapsed = start.elapsed();
    pb.finish_and_clear();

    info!(
        source = %source.display(),
        added = report.added,
        skipped = report.skipped,
        total = catalog.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Ingested word list"
    );

    Ok(SourceReport {
        source: source.to_path_buf(),
        report,
        elapsed,
        total: catalog.len(),
    })
}

/// The `*.txt` files directly inside `dir`, any case of extension
fn text_files_in(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn progress_bar(len: u64, source: &Path) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("Reading in \"{}\"", source.display()));
    pb
}
