/*!
The context --- to which clauses are added, and within which solves take place.

A [Context] bundles the databases of a solve (clauses, atoms, trail, watch
lists) with its configuration, counters, and state. The solving algorithm is
factored into a collection of [procedures](crate::procedures) implemented as
context methods, with [solve](crate::procedures::solve) at the top.

# Example

```rust
use wren_sat::{config::Config, context::Context, reports::Report};
use wren_sat::structures::literal::Literal;

let mut ctx = Context::new(2, Config::default());

ctx.add_clause(vec![Literal::new(1), Literal::new(2)]);
ctx.add_clause(vec![Literal::new(-1), Literal::new(-2)]);

assert_eq!(ctx.solve(), Report::Satisfiable);
assert_ne!(ctx.value_of(1), ctx.value_of(2));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, ClauseKey},
    reports::Report,
    structures::literal::{Atom, Literal},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses may be added, and satisfiability of those added is open.
    Input,

    /// The formula is satisfied by the current valuation.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The search was abandoned, as the conflict budget ran out.
    Exhausted,
}

/// A hook called as the search progresses, with the current counters and the
/// count of variables not yet fixed at the root level.
pub type ProgressCallback = Box<dyn FnMut(&Counters, usize)>;

/// A solver instance over a fixed range of atoms.
pub struct Context {
    /// Configuration of the context.
    pub config: Config,

    /// Counters over the context, updated as the search proceeds.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The watch lists.
    pub watches: Watches,

    /// The state of the context.
    pub state: ContextState,

    pub(crate) progress: Option<ProgressCallback>,
}

impl Context {
    /// A fresh context over atoms 1..=`variables`.
    pub fn new(variables: Atom, config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            atom_db: AtomDB::new(variables),
            trail: Trail::new(variables),
            watches: Watches::new(variables),
            state: ContextState::Input,
            progress: None,
        }
    }

    /// The report corresponding to the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The value of an atom on the current valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(Literal::of_atom(atom, true))
    }

    /// A full witness for the current valuation: one literal per atom,
    /// negative exactly when the atom is valued false.
    pub fn witness(&self) -> Vec<Literal> {
        self.atom_db.witness()
    }

    /// Installs a progress callback, invoked whenever the decision count
    /// reaches a power of two.
    pub fn set_progress(&mut self, callback: ProgressCallback) {
        self.progress = Some(callback);
    }

    /// Values a literal true at the current level and stores it on the trail.
    ///
    /// `reason` is the clause which forced the assignment, or nothing for a
    /// decision or root-level assignment.
    pub fn assign(&mut self, literal: Literal, reason: Option<ClauseKey>) {
        let level = self.trail.level();
        self.atom_db.set_value(literal, level, reason);
        self.trail.push(literal);
    }
}
