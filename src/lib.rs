//! Word Finder
//!
//! Keeps a deduplicated catalog of lowercase words and filters it by length,
//! fixed letters at given positions, and letters that must or must not appear.
//! Handy for word games such as Wordle.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::catalog::WordCatalog;
//! use word_finder::matcher::{ConstraintSet, MatchEngine};
//!
//! let catalog = WordCatalog::from_words(["crane", "brake", "slate", "Crane"]);
//! assert_eq!(catalog.len(), 3);
//!
//! let mut constraints = ConstraintSet::with_pattern("??a?e").unwrap();
//! constraints.excluded = "s".parse().unwrap();
//!
//! let mut engine = MatchEngine::new();
//! let result = engine.search(&catalog, &constraints).unwrap();
//! assert_eq!(result.count, 2);
//! ```

// Core domain types
pub mod core;

// Word catalog and persistence
pub mod catalog;

// Constraints and matching
pub mod matcher;

// Command implementations
pub mod commands;

// Settings file
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Terminal output formatting
pub mod output;
