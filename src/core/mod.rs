//! Core domain types
//!
//! Validated value types shared by the catalog and the match engine. Nothing
//! here performs I/O or logging.

mod letter;
mod word;

pub use letter::{Letter, LetterError, LetterSet, value_description_pairs};
pub use word::{Word, WordError};
