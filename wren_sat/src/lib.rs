//! A library for determining the satisfiability of boolean formulas written
//! in conjunctive normal form.
//!
//! The library contains three progressively richer solver cores:
//!
//! - [engines::dpll] --- a recursive DPLL procedure with chronological
//!   backtracking.
//! - [engines::occurrence] --- conflict-driven clause-learning over occurrence
//!   lists, with non-chronological backjumping and 1-UIP learning.
//! - [context] --- the primary core: conflict-driven clause-learning with
//!   two-watched-literal propagation, blocker literals, and learnt-clause
//!   minimization.
//!
//! # Orientation
//!
//! The primary core is built around a [Context](context::Context), which
//! bundles a handful of databases instantiating the objects of a solve:
//!
//! - A formula is stored in a [clause database](db::clause), and clauses are
//!   reached through [keys](db::ClauseKey).
//! - A valuation --- with the level, reason, and analysis stamp of each atom ---
//!   is stored in an [atom database](db::atom).
//! - Assignments in order, the boundaries of each decision level, and the
//!   propagation cursor make up the [trail](db::trail).
//! - Which clauses watch which literal is recorded in the
//!   [watch lists](db::watches).
//!
//! The algorithm over these is factored into a collection of
//! [procedures](procedures), and formulas are read and models checked
//! through the [cnf] module, which keeps parsing outside every core.
//!
//! Useful starting points:
//!
//! - The [solve procedure](procedures::solve) for the dynamics of a solve.
//! - [Propagation](procedures::bcp) for the two-watched-literal scheme.
//! - [Analysis](procedures::analysis) for how clauses are learnt.
//!
//! # Example
//!
//! ```rust
//! use wren_sat::{cnf::Cnf, config::Config, context::Context, reports::Report};
//!
//! let dimacs = "p cnf 2 2
//! 1 2 0
//! -1 -2 0
//! ";
//!
//! let cnf = Cnf::read(dimacs.as_bytes()).unwrap();
//! let mut ctx = Context::from_cnf(&cnf, Config::default());
//!
//! assert_eq!(ctx.solve(), Report::Satisfiable);
//! assert!(cnf.unsatisfied_clause(&ctx.witness()).is_none());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with a target per subsystem
//! (listed in [misc::log]) so output can be narrowed when an implementation
//! such as [env_logger](https://docs.rs/env_logger) is installed --- e.g.
//! `RUST_LOG=propagation` for the propagation hot path.
//!
//! # Determinism
//!
//! Every core is single-threaded and free of hidden sources of order: two
//! runs over one formula with one configuration produce identical trails,
//! learnt clauses, and statistics.

pub mod builder;
pub mod cnf;
pub mod config;
pub mod context;
pub mod db;
pub mod engines;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
