//! The algorithm for determining satisfiability, factored into procedures.
//!
//! Each procedure is implemented as a method (or a few methods) on a
//! [Context](crate::context::Context):
//!
//! - [bcp] --- unit propagation over the two-watched-literal scheme.
//! - [decision] --- choosing an atom to value when propagation settles.
//! - [analysis] --- deriving a learnt clause from a conflict.
//! - [backjump] --- unwinding the trail to an earlier level.
//! - [solve] --- the loop tying the above together.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
