//! Constraint compilation and matching
//!
//! `MatchEngine::compile` turns a `ConstraintSet` into a `CompiledPredicate`:
//! a fixed-length array of character classes plus the two letter masks. The
//! predicate is then evaluated against every catalog word, cheapest checks
//! first.

use super::constraints::{ConstraintSet, PositionalConstraint, WILDCARD};
use crate::catalog::WordCatalog;
use crate::core::{LetterSet, Word};
use rayon::prelude::*;
use thiserror::Error;

/// Error type for constraint compilation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("The character \"{character}\" at position {position} is not a letter")]
    InvalidCharacter { position: usize, character: char },
    #[error("Expected {expected} positional constraints, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Character class for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Any ASCII letter
    Any,
    /// This lower-case letter only
    Exact(u8),
}

impl Slot {
    #[inline]
    fn accepts(self, b: u8) -> bool {
        match self {
            Self::Any => b.is_ascii_alphabetic(),
            Self::Exact(expected) => b.eq_ignore_ascii_case(&expected),
        }
    }
}

/// A constraint set ready to test words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPredicate {
    target_length: usize,
    excluded: LetterSet,
    included: LetterSet,
    /// `None` when no position holds a fixed letter
    pattern: Option<Box<[Slot]>>,
}

impl CompiledPredicate {
    #[must_use]
    pub const fn target_length(&self) -> usize {
        self.target_length
    }

    /// The positional pattern, if any position is fixed
    #[must_use]
    pub fn pattern(&self) -> Option<&[Slot]> {
        self.pattern.as_deref()
    }

    #[must_use]
    pub const fn has_positional_filter(&self) -> bool {
        self.pattern.is_some()
    }

    /// Test a catalog word
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.matches_letters(word.as_bytes())
    }

    /// Test raw ASCII text, ignoring case
    ///
    /// Text containing anything but ASCII letters never matches.
    #[must_use]
    pub fn matches_text(&self, text: &[u8]) -> bool {
        text.iter().all(u8::is_ascii_alphabetic) && self.matches_letters(text)
    }

    fn matches_letters(&self, text: &[u8]) -> bool {
        if text.len() != self.target_length {
            return false;
        }

        if !self.excluded.is_empty() && self.excluded.intersects(text) {
            return false;
        }

        if !self.included.is_empty() && !self.included.contained_in(text) {
            return false;
        }

        match &self.pattern {
            None => true,
            Some(slots) => slots.iter().zip(text).all(|(slot, &b)| slot.accepts(b)),
        }
    }

    fn without_pattern(&self) -> Self {
        Self {
            pattern: None,
            ..self.clone()
        }
    }
}

/// Result of applying a predicate to a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Matching words in catalog order
    pub words: Vec<Word>,
    pub count: usize,
}

/// Compiles constraint sets and runs them against catalogs
///
/// The engine remembers the predicate of the last search. When a later
/// compile fails, the remembered predicate keeps its length and letter sets
/// but loses its positional pattern, so callers that re-apply it get "no
/// position-based filtering" rather than a stale pattern.
#[derive(Debug, Default)]
pub struct MatchEngine {
    current: Option<CompiledPredicate>,
}

impl MatchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a constraint set
    ///
    /// # Errors
    /// - `CompileError::InvalidCharacter` for the first position holding a
    ///   non-letter
    /// - `CompileError::LengthMismatch` if positions are set but their count
    ///   differs from the target length
    ///
    /// # Examples
    /// ```
    /// use word_finder::matcher::{ConstraintSet, MatchEngine};
    ///
    /// let set = ConstraintSet::with_pattern("c????").unwrap();
    /// let predicate = MatchEngine::compile(&set).unwrap();
    /// assert!(predicate.matches_text(b"crane"));
    /// assert!(!predicate.matches_text(b"brake"));
    /// ```
    pub fn compile(constraints: &ConstraintSet) -> Result<CompiledPredicate, CompileError> {
        let positions = constraints.positions();
        let target_length = constraints.target_length();

        if !positions.is_empty() && positions.len() != target_length {
            return Err(CompileError::LengthMismatch {
                expected: target_length,
                actual: positions.len(),
            });
        }

        let mut slots = Vec::with_capacity(positions.len());
        let mut any_fixed = false;

        for (position, constraint) in positions.iter().enumerate() {
            let slot = match *constraint {
                PositionalConstraint::Any => Slot::Any,
                PositionalConstraint::Letter(c) if c.is_ascii_alphabetic() => {
                    any_fixed = true;
                    Slot::Exact(c.to_ascii_lowercase() as u8)
                }
                PositionalConstraint::Letter(c) if c == WILDCARD || c.is_whitespace() => Slot::Any,
                PositionalConstraint::Letter(character) => {
                    return Err(CompileError::InvalidCharacter {
                        position,
                        character,
                    });
                }
            };
            slots.push(slot);
        }

        Ok(CompiledPredicate {
            target_length,
            excluded: constraints.excluded,
            included: constraints.included,
            pattern: any_fixed.then(|| slots.into_boxed_slice()),
        })
    }

    /// Evaluate a predicate against every catalog word
    ///
    /// Results keep the catalog's order.
    #[must_use]
    pub fn apply(catalog: &WordCatalog, predicate: &CompiledPredicate) -> MatchResult {
        let words: Vec<Word> = catalog
            .words()
            .par_iter()
            .filter(|w| predicate.matches(w))
            .cloned()
            .collect();

        MatchResult {
            count: words.len(),
            words,
        }
    }

    /// Compile and apply in one step, remembering the predicate
    ///
    /// # Errors
    /// Returns the compile error unchanged; see [`MatchEngine`] for what
    /// happens to the remembered predicate.
    pub fn search(
        &mut self,
        catalog: &WordCatalog,
        constraints: &ConstraintSet,
    ) -> Result<MatchResult, CompileError> {
        match Self::compile(constraints) {
            Ok(predicate) => {
                let result = Self::apply(catalog, &predicate);
                self.current = Some(predicate);
                Ok(result)
            }
            Err(e) => {
                self.current = self.current.as_ref().map(CompiledPredicate::without_pattern);
                Err(e)
            }
        }
    }

    /// The predicate of the last search, if any
    #[must_use]
    pub const fn current(&self) -> Option<&CompiledPredicate> {
        self.current.as_ref()
    }
}
