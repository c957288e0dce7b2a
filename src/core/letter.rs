//! Letters and letter sets
//!
//! A `Letter` is one of the 26 ASCII letters. A `LetterSet` is a set of them
//! packed into a 26-bit mask, which makes the included/excluded checks of the
//! match engine a couple of bit operations per word.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for letter parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("The character {0:?} is not a letter")]
    NotALetter(char),
    #[error("No letter is described as {0:?}")]
    UnknownDescription(String),
}

/// One of the ASCII letters A-Z
///
/// Stored as its zero-based alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every letter in alphabetical order
    pub const ALL: [Self; 26] = {
        let mut all = [Self(0); 26];
        let mut i = 0;
        while i < 26 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Create a letter from a character, ignoring case
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` for anything outside A-Z / a-z.
    pub fn from_char(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// Create a letter from an ASCII byte, ignoring case
    #[inline]
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_alphabetic() {
            Some(Self(b.to_ascii_lowercase() - b'a'))
        } else {
            None
        }
    }

    /// Zero-based alphabet index (a = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The lower-case byte for this letter
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        b'a' + self.0
    }

    /// The lower-case character for this letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// The user-facing description, an upper-case character such as "A"
    #[must_use]
    pub fn description(self) -> String {
        self.as_char().to_ascii_uppercase().to_string()
    }

    /// Look a letter up by its description, ignoring case
    ///
    /// # Errors
    /// Returns `LetterError::UnknownDescription` if no letter matches.
    pub fn from_description(description: &str) -> Result<Self, LetterError> {
        Self::ALL
            .into_iter()
            .find(|l| l.description().eq_ignore_ascii_case(description.trim()))
            .ok_or_else(|| LetterError::UnknownDescription(description.to_string()))
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char().to_ascii_uppercase())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

/// `(name, description)` pairs for every letter, used to build letter pickers
///
/// # Examples
/// ```
/// use word_finder::core::value_description_pairs;
///
/// let pairs = value_description_pairs();
/// assert_eq!(pairs.len(), 26);
/// assert_eq!(pairs[0], ("a".to_string(), "A".to_string()));
/// ```
#[must_use]
pub fn value_description_pairs() -> Vec<(String, String)> {
    Letter::ALL
        .iter()
        .map(|l| (l.as_char().to_string(), l.description()))
        .collect()
}

/// A set of letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Add a letter; returns false if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let was_absent = !self.contains(letter);
        self.0 |= letter.bit();
        was_absent
    }

    /// Remove a letter; returns false if it was not present
    pub fn remove(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 &= !letter.bit();
        was_present
    }

    /// Idempotently add (`selected = true`) or remove a letter
    pub fn set(&mut self, letter: Letter, selected: bool) {
        if selected {
            self.insert(letter);
        } else {
            self.remove(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// The set of letters appearing in `text`; non-letters are ignored
    #[must_use]
    pub fn of_word(text: &[u8]) -> Self {
        text.iter()
            .filter_map(|&b| Letter::from_byte(b))
            .fold(Self::EMPTY, |acc, l| Self(acc.0 | l.bit()))
    }

    /// True if every letter of this set appears somewhere in `text`
    #[must_use]
    pub fn contained_in(self, text: &[u8]) -> bool {
        Self::of_word(text).0 & self.0 == self.0
    }

    /// True if any letter of this set appears somewhere in `text`
    #[must_use]
    pub fn intersects(self, text: &[u8]) -> bool {
        Self::of_word(text).0 & self.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALL.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl FromStr for LetterSet {
    type Err = LetterError;

    /// Parse a run of letters such as "aeS"; separators (spaces, commas) are
    /// skipped, anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Letter::from_char)
            .collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
