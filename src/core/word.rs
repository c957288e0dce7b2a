//! Word representation
//!
//! A Word is a non-empty run of ASCII letters, stored lower-case so that
//! comparison and deduplication are case-insensitive by construction.

use std::fmt;
use thiserror::Error;

/// A dictionary word made only of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains the non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Any character is not an ASCII letter (digits, punctuation, whitespace
    ///   and non-ASCII letters are all rejected)
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("it's").is_err());
    /// assert!(Word::new("hello2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self(text.to_ascii_lowercase()))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the word as lower-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the word has three identical letters in a row
    ///
    /// ```
    /// use word_finder::core::Word;
    ///
    /// assert!(Word::new("brrr").unwrap().has_triple_run());
    /// assert!(!Word::new("bookkeeper").unwrap().has_triple_run());
    /// ```
    #[must_use]
    pub fn has_triple_run(&self) -> bool {
        self.as_bytes()
            .windows(3)
            .any(|w| w[0] == w[1] && w[1] == w[2])
    }

    /// Consume the word, returning the owned lower-case text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
