//! Word search command

use crate::catalog::WordCatalog;
use crate::core::{LetterError, LetterSet};
use crate::matcher::{CompileError, ConstraintError, ConstraintSet, MatchEngine, MatchResult};
use crate::output::formatters::search_status;
use thiserror::Error;
use tracing::{debug, warn};

/// Anything that can go wrong turning user input into results
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error(transparent)]
    Letters(#[from] LetterError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Search input as typed by the user
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Target length; defaults to the pattern length, then to the configured default
    pub length: Option<usize>,
    /// One character per position, e.g. `"c?a**"`
    pub pattern: Option<String>,
    /// Letters that must appear somewhere
    pub include: Option<String>,
    /// Letters that must not appear
    pub exclude: Option<String>,
}

impl SearchRequest {
    /// Build the constraint set
    ///
    /// When both a pattern and a length are given, the pattern is truncated
    /// or padded with wildcards to the length.
    ///
    /// # Errors
    /// Returns `SearchError` for a zero length, a bad pattern character or a
    /// non-letter in the letter lists.
    pub fn to_constraints(&self, default_length: usize) -> Result<ConstraintSet, SearchError> {
        let mut set = match &self.pattern {
            Some(pattern) => ConstraintSet::with_pattern(pattern)?,
            None => ConstraintSet::new(self.length.unwrap_or(default_length))?,
        };

        if let Some(length) = self.length {
            set.set_target_length(length)?;
        }

        if let Some(include) = &self.include {
            set.included = include.parse::<LetterSet>()?;
        }
        if let Some(exclude) = &self.exclude {
            set.excluded = exclude.parse::<LetterSet>()?;
        }

        Ok(set)
    }
}

/// Search results plus the query that produced them
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub constraints: ConstraintSet,
    pub result: MatchResult,
}

impl SearchOutcome {
    /// The result-count status line
    #[must_use]
    pub fn status(&self) -> String {
        search_status(self.result.count)
    }
}

/// Run a search against the catalog
///
/// # Errors
/// Returns `CompileError` if the constraint set can't be compiled.
pub fn run_search(
    engine: &mut MatchEngine,
    catalog: &WordCatalog,
    constraints: &ConstraintSet,
) -> Result<SearchOutcome, CompileError> {
    let conflicts = constraints.conflicts();
    if !conflicts.is_empty() {
        warn!(letters = %conflicts, "Letters are both included and excluded; nothing can match");
    }

    debug!(
        length = constraints.target_length(),
        pattern = %constraints,
        included = %constraints.included,
        excluded = %constraints.excluded,
        "Searching catalog"
    );

    let result = engine.search(catalog, constraints).inspect_err(|e| {
        warn!(error = %e, "Search constraints rejected");
    })?;

    debug!(count = result.count, "Search complete");

    Ok(SearchOutcome {
        constraints: constraints.clone(),
        result,
    })
}
