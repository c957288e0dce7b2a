//! Search constraints
//!
//! A `ConstraintSet` is the structured form of a search: the target length,
//! an optional per-position letter list, and the included/excluded letter sets.

use crate::core::{Letter, LetterSet};
use std::fmt;
use thiserror::Error;

/// Marker accepted as "any letter" in positional input
pub const WILDCARD: char = '*';

/// Error type for constraint edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Target word length must be at least 1")]
    ZeroLength,
    #[error("Position {position} is outside a {length}-letter word")]
    PositionOutOfRange { position: usize, length: usize },
    #[error("The character \"{character}\" at position {position} is not a letter")]
    InvalidCharacter { position: usize, character: char },
}

/// Requirement for a single position of the target word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PositionalConstraint {
    /// Any letter is accepted
    #[default]
    Any,
    /// Exactly this letter; anything other than an ASCII letter makes the
    /// constraint set fail to compile
    Letter(char),
}

impl PositionalConstraint {
    /// Resolve a single character
    ///
    /// Whitespace and `*` are wildcards; letters are lower-cased.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidCharacter` for anything else.
    pub fn from_char(position: usize, c: char) -> Result<Self, ConstraintError> {
        if c == WILDCARD || c.is_whitespace() {
            Ok(Self::Any)
        } else if c.is_ascii_alphabetic() {
            Ok(Self::Letter(c.to_ascii_lowercase()))
        } else {
            Err(ConstraintError::InvalidCharacter {
                position,
                character: c,
            })
        }
    }

    /// Resolve raw text-box input: blank is a wildcard, otherwise only the
    /// first character counts
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidCharacter` if the first character is
    /// neither a letter nor a wildcard marker.
    pub fn from_input(position: usize, input: &str) -> Result<Self, ConstraintError> {
        match input.trim().chars().next() {
            None => Ok(Self::Any),
            Some(c) => Self::from_char(position, c),
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for PositionalConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "{WILDCARD}"),
            Self::Letter(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

/// A complete search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    target_length: usize,
    positions: Vec<PositionalConstraint>,
    pub included: LetterSet,
    pub excluded: LetterSet,
}

impl ConstraintSet {
    /// A query for words of `target_length` letters with nothing else set
    ///
    /// # Errors
    /// Returns `ConstraintError::ZeroLength` for a length of 0.
    pub fn new(target_length: usize) -> Result<Self, ConstraintError> {
        if target_length == 0 {
            return Err(ConstraintError::ZeroLength);
        }
        Ok(Self {
            target_length,
            positions: Vec::new(),
            included: LetterSet::new(),
            excluded: LetterSet::new(),
        })
    }

    /// Build from a pattern such as `"c?a**"`, one character per position
    ///
    /// `?`, `*`, `_`, `.` and spaces are wildcards. The pattern length becomes
    /// the target length.
    ///
    /// # Errors
    /// Returns `ZeroLength` for an empty pattern and `InvalidCharacter` for
    /// anything that isn't a letter or wildcard.
    ///
    /// # Examples
    /// ```
    /// use word_finder::matcher::ConstraintSet;
    ///
    /// let set = ConstraintSet::with_pattern("c????").unwrap();
    /// assert_eq!(set.target_length(), 5);
    /// assert_eq!(set.to_string(), "C****");
    /// ```
    pub fn with_pattern(pattern: &str) -> Result<Self, ConstraintError> {
        let mut set = Self::new(pattern.chars().count())?;
        set.positions = pattern
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '?' | '_' | '.' => Ok(PositionalConstraint::Any),
                c => PositionalConstraint::from_char(position, c),
            })
            .collect::<Result<_, _>>()?;
        Ok(set)
    }

    #[must_use]
    pub const fn target_length(&self) -> usize {
        self.target_length
    }

    /// Per-position constraints; empty when none were ever set
    #[must_use]
    pub fn positions(&self) -> &[PositionalConstraint] {
        &self.positions
    }

    /// Change the target length
    ///
    /// Existing positional entries keep their index. Shrinking drops the
    /// highest positions; growing appends wildcards.
    ///
    /// # Errors
    /// Returns `ConstraintError::ZeroLength` for a length of 0.
    pub fn set_target_length(&mut self, n: usize) -> Result<(), ConstraintError> {
        if n == 0 {
            return Err(ConstraintError::ZeroLength);
        }
        self.target_length = n;
        if !self.positions.is_empty() {
            self.positions.resize(n, PositionalConstraint::Any);
        }
        Ok(())
    }

    /// Require `c` at `position`, or clear it with a wildcard marker
    ///
    /// # Errors
    /// - `PositionOutOfRange` if `position >= target_length`
    /// - `InvalidCharacter` if `c` is neither a letter nor a wildcard marker
    pub fn set_positional_letter(
        &mut self,
        position: usize,
        c: char,
    ) -> Result<(), ConstraintError> {
        let constraint = PositionalConstraint::from_char(position, c)?;
        self.set_position(position, constraint)
    }

    /// Like [`set_positional_letter`](Self::set_positional_letter) for raw
    /// text input, where blank means wildcard
    ///
    /// # Errors
    /// Same as `set_positional_letter`.
    pub fn set_positional_input(
        &mut self,
        position: usize,
        input: &str,
    ) -> Result<(), ConstraintError> {
        let constraint = PositionalConstraint::from_input(position, input)?;
        self.set_position(position, constraint)
    }

    /// Store a constraint without validating its character
    ///
    /// # Errors
    /// Returns `PositionOutOfRange` if `position >= target_length`.
    pub fn set_position(
        &mut self,
        position: usize,
        constraint: PositionalConstraint,
    ) -> Result<(), ConstraintError> {
        if position >= self.target_length {
            return Err(ConstraintError::PositionOutOfRange {
                position,
                length: self.target_length,
            });
        }
        if self.positions.is_empty() {
            self.positions = vec![PositionalConstraint::Any; self.target_length];
        }
        self.positions[position] = constraint;
        Ok(())
    }

    /// Drop every positional constraint
    pub fn clear_positions(&mut self) {
        self.positions.clear();
    }

    /// Add (`selected = true`) or remove a letter that must appear somewhere
    pub fn toggle_included(&mut self, letter: Letter, selected: bool) {
        self.included.set(letter, selected);
    }

    /// Add (`selected = true`) or remove a letter that must not appear at all
    pub fn toggle_excluded(&mut self, letter: Letter, selected: bool) {
        self.excluded.set(letter, selected);
    }

    /// Letters that are both required and forbidden
    ///
    /// The engine accepts such a set (it simply matches nothing); callers can
    /// use this to warn the user.
    #[must_use]
    pub fn conflicts(&self) -> LetterSet {
        self.included
            .iter()
            .filter(|&l| self.excluded.contains(l))
            .collect()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positions.is_empty() {
            for _ in 0..self.target_length {
                write!(f, "{WILDCARD}")?;
            }
        } else {
            for p in &self.positions {
                write!(f, "{p}")?;
            }
        }
        Ok(())
    }
}
