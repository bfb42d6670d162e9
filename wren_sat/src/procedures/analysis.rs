/*!
Conflict analysis: deriving an asserting clause from a conflict.

# Overview

Analysis takes a clause false on the current valuation at some level *l* ≥ 1
and produces a learnt clause which

- is implied by the clauses already held,
- contains exactly one literal assigned at level *l* --- the *asserted*
  literal, the negation of the first unique implication point (1-UIP) --- and
- asserts that literal once the trail is unwound to the *backjump level*:
  the highest level among its other literals, or the root if there are none.

# The marked set

The learnt clause is built as the negations of a set of marked (false)
literals, discovered by walking the trail backwards from its tail through
the reason clauses of marked assignments. An atom is marked by writing the
current conflict count into its stamp, so membership of the *current*
analysis is a single comparison and no marks need clearing afterwards.

Two counters track the walk: `current`, the marked literals at the conflict
level not yet resolved through, and `lower`, the marked literals at levels
below. While more than one current-level mark is outstanding the walk
resolves each marked assignment through its reason, marking the reason's
literals in turn. Once a single current-level mark remains, the most recent
such literal on the trail is the 1-UIP: every path from the level's decision
to the conflict passes through it. The walk then continues down collecting
the marked lower-level literals, which (negated) join the negated UIP in the
learnt clause.

Decisions have no reason, and no reason is consulted for them: a marked
decision simply counts down `current`, which is why the walk cannot pass
below the level's decision without the count reaching one.

# Minimization

A literal of the learnt clause whose reason's other literals all appear in
the learnt clause is redundant --- resolving with the reason removes the
literal and adds nothing. Such literals are dropped in a single pass over
the lower-level literals before the asserted literal is appended; the
asserted literal itself must survive for the clause to assert. Literals
fixed at the root are never marked, so a reason with a fixed antecedent
blocks the drop.

# Installation

The learnt clause watches the asserted literal and one of its backjump-level
literals: after the jump the asserted literal is the sole unfalsified
literal, and the backjump-level watch is the falsified literal which stays
assigned longest should the search later unwind further. A learnt clause
reduced to the asserted literal alone is not stored; the assertion is made a
root-level assignment instead.
*/

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets,
    structures::literal::Literal,
};

impl Context {
    /// Learns a clause from the given conflict, unwinds to its backjump
    /// level, and asserts the negation of the 1-UIP.
    ///
    /// The caller ensures the conflict arose above the root level.
    pub fn analyze(&mut self, conflict: ClauseKey) {
        let conflict_level = self.trail.level();
        let stamp = self.counters.conflicts;
        debug_assert!(conflict_level > 0);

        log::info!(target: targets::ANALYSIS, "Analysis of {conflict} at level {conflict_level}");

        let mut learnt: Vec<Literal> = Vec::default();
        let mut backjump_level: LevelIndex = 0;

        // Marked literals at the conflict level still to resolve through.
        let mut current: usize = 0;
        // Marked literals at levels in (0, conflict_level).
        let mut lower: usize = 0;

        let clause = self.clause_db.get(conflict);
        for &literal in clause.literals() {
            self.atom_db
                .mark(literal, stamp, conflict_level, &mut current, &mut lower);
        }
        debug_assert!(current >= 1);

        let assignments = self.trail.assignments();
        let mut cursor = assignments.len();

        // Resolve marked assignments through their reasons, most recent
        // first, until one current-level mark remains.
        while current > 1 {
            cursor -= 1;
            let literal = assignments[cursor];

            if self.atom_db.stamp_of(literal.atom()) != stamp {
                continue;
            }

            if let Some(reason) = self.atom_db.reason_of(literal.atom()) {
                let clause = self.clause_db.get(reason);
                for &other in clause.literals() {
                    self.atom_db
                        .mark(other, stamp, conflict_level, &mut current, &mut lower);
                }
            }

            current -= 1;
        }

        // The last marked current-level literal on the trail is the UIP.
        while self.atom_db.stamp_of(assignments[cursor - 1].atom()) != stamp {
            cursor -= 1;
        }
        let uip = assignments[cursor - 1];
        cursor -= 1;

        // Collect the marked lower-level literals, negated.
        while lower > 0 {
            cursor -= 1;
            let literal = assignments[cursor];

            if self.atom_db.stamp_of(literal.atom()) == stamp {
                learnt.push(-literal);

                let level = self.atom_db.level_of(literal.atom());
                if level > backjump_level {
                    backjump_level = level;
                }

                lower -= 1;
            }
        }

        if self.config.minimization {
            let marked = learnt.clone();
            learnt.retain(|&literal| match self.atom_db.reason_of(literal.atom()) {
                None => true,
                Some(reason) => !self
                    .clause_db
                    .get(reason)
                    .literals()
                    .iter()
                    .all(|other| other.atom() == literal.atom() || marked.contains(other)),
            });
        }

        let asserted = -uip;
        log::info!(
            target: targets::ANALYSIS,
            "Learnt a clause of {} literals asserting {asserted} at level {backjump_level}",
            learnt.len() + 1,
        );

        if backjump_level < conflict_level - 1 {
            self.counters.backjumps += 1;
        }

        self.backtrack(backjump_level);

        if learnt.is_empty() {
            debug_assert!(backjump_level == 0);
            self.assign(asserted, None);
        } else {
            // Watch the asserted literal and the deepest of the others: the
            // falsified literal which stays assigned longest under any
            // further unwinding.
            learnt.push(asserted);
            let last = learnt.len() - 1;
            learnt.swap(0, last);

            if learnt.len() > 2 {
                let mut deepest = 1;
                for index in 2..learnt.len() {
                    if self.atom_db.level_of(learnt[index].atom())
                        > self.atom_db.level_of(learnt[deepest].atom())
                    {
                        deepest = index;
                    }
                }
                learnt.swap(1, deepest);
            }

            let key = self.store_clause(learnt);
            self.assign(asserted, Some(key));
        }
    }
}
