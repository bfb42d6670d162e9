/*!
Clause ingestion.

Clauses reach a context through [add_clause](crate::context::Context::add_clause),
whether read from a formula or learnt during a solve:

- An empty clause marks the formula permanently unsatisfiable.
- A unit clause collapses into a root-level assignment --- or, when its literal
  is already false, into permanent unsatisfiability.
- Anything longer is stored, watching its first two literals and with its
  first literal as blocker.

Duplicate literals are dropped before storage (first occurrence kept) so the
two watch slots always hold distinct literals. Tautological clauses are kept;
a clause containing ℓ and -ℓ never propagates and is harmless.
*/

use crate::{
    cnf::Cnf,
    context::{Context, ContextState},
    db::ClauseKey,
    misc::log::targets,
    structures::{clause::Clause, literal::Literal},
};

/// Outcomes of adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was a unit and its literal was assigned at the root level.
    Unit,

    /// The clause was a unit whose literal already held, so nothing was done.
    Skipped,

    /// The clause cannot be satisfied, and the context is marked so.
    Unsatisfiable,
}

impl Context {
    /// Installs a clause over the given literals.
    ///
    /// To be called before any decision has been made; learnt clauses take
    /// the direct path through [store_clause](Context::store_clause) after
    /// the backjump.
    pub fn add_clause(&mut self, literals: Vec<Literal>) -> ClauseOk {
        debug_assert!(self.trail.level() == 0);

        let mut unique: Vec<Literal> = Vec::with_capacity(literals.len());
        for literal in literals {
            if !unique.contains(&literal) {
                unique.push(literal);
            }
        }

        match unique.len() {
            0 => {
                log::info!(target: targets::INGESTION, "Ingested an empty clause");
                self.counters.added += 1;
                self.state = ContextState::Unsatisfiable;
                ClauseOk::Unsatisfiable
            }

            1 => {
                self.counters.added += 1;
                let unit = unique[0];
                match self.atom_db.value_of(unit) {
                    None => {
                        self.assign(unit, None);
                        ClauseOk::Unit
                    }

                    Some(true) => ClauseOk::Skipped,

                    Some(false) => {
                        log::info!(target: targets::INGESTION, "Ingested an inconsistent unit clause {unit}");
                        self.state = ContextState::Unsatisfiable;
                        ClauseOk::Unsatisfiable
                    }
                }
            }

            _ => {
                self.store_clause(unique);
                ClauseOk::Added
            }
        }
    }

    /// Adds every clause of a formula.
    ///
    /// Ingestion continues past an unsatisfiable clause, so counters and
    /// occurrence structure reflect the whole formula.
    pub fn add_formula(&mut self, cnf: &Cnf) {
        for clause in &cnf.clauses {
            self.add_clause(clause.clone());
        }
    }

    /// A context holding the given formula.
    pub fn from_cnf(cnf: &Cnf, config: crate::config::Config) -> Self {
        let mut context = Context::new(cnf.variables, config);
        context.add_formula(cnf);
        context
    }

    /// Stores a clause of two or more distinct literals, watching the first
    /// two.
    pub(crate) fn store_clause(&mut self, literals: Vec<Literal>) -> ClauseKey {
        self.counters.added += 1;
        let key = self.clause_db.store(Clause::new(literals));

        let clause = self.clause_db.get(key);
        let (watch_a, watch_b) = (clause.watch_a(), clause.watch_b());

        self.watches.watch(watch_a, key);
        self.watches.watch(watch_b, key);

        key
    }
}
