//! Constraint matching
//!
//! Build a [`ConstraintSet`], compile it with [`MatchEngine::compile`], then
//! [`MatchEngine::apply`] the predicate to a catalog.

pub mod constraints;
mod engine;

pub use constraints::{ConstraintError, ConstraintSet, PositionalConstraint, WILDCARD};
pub use engine::{CompileError, CompiledPredicate, MatchEngine, MatchResult, Slot};
