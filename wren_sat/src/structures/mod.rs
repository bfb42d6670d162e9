//! The abstract elements of a solve and their representation.
//!
//! - [Literals](literal) are non-zero signed integers, paired with helpers for
//!   per-literal storage.
//! - [Clauses](clause) are disjunctions of literals, stored together with their
//!   two watched literals and a blocker.

pub mod clause;
pub mod literal;
