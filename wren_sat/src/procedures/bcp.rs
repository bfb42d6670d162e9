/*!
Boolean constraint propagation over watched literals.

# Overview

Propagation settles the consequences of every assignment on the trail which
has not yet been propagated. When a literal ℓ becomes true only clauses
containing -ℓ move closer to being falsified, and of those only clauses
*watching* -ℓ need to be examined --- every other clause containing -ℓ still
has two watches which were not falsified by the assignment.

For each clause watching -ℓ, in order:

1. If the blocker of the clause is true the clause is satisfied, and the
   watch stands.
2. If the *other* watched literal is true the clause is satisfied; the other
   watch becomes the blocker, and the watch stands.
3. Otherwise the clause is scanned for a replacement: an unwatched literal
   which is not false. If one is found the watch moves there, off this list
   and onto the replacement's, and a true replacement also becomes the
   blocker.
4. With no replacement every unwatched literal is false, so the clause is
   settled by the other watch: false and the clause is a conflict, returned
   to the caller; unassigned and the clause is unit, forcing the other watch
   with the clause as reason.

# The walked list

Finding a replacement removes the clause from the list being walked, while
units queued along the way will later push onto other lists. The list is
therefore detached from the watch database for the walk and rewritten in
place with a read index and a write index --- no entry is skipped or visited
twice, and on a conflict the unexamined tail is retained verbatim. Iteration
order is the order watches were installed, so runs are reproducible.

# Conflicts are not errors

A conflict is an expected outcome and the entry point of
[analysis](crate::procedures::analysis), so propagation reports it by
returning the conflicting clause's key rather than through a `Result`.
*/

use crate::{
    context::Context,
    db::ClauseKey,
    misc::log::targets,
    structures::literal::Literal,
};

impl Context {
    /// Propagates every unpropagated assignment on the trail.
    ///
    /// Returns the key of a conflicting clause, or `None` once the
    /// propagation cursor has caught the trail without conflict.
    pub fn propagate(&mut self) -> Option<ClauseKey> {
        while let Some(literal) = self.trail.next_unpropagated() {
            self.counters.propagations += 1;
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");

            if let Some(conflict) = self.propagate_literal(literal) {
                self.counters.conflicts += 1;
                log::trace!(target: targets::PROPAGATION, "Conflict in {conflict}");
                return Some(conflict);
            }
        }
        None
    }

    /// Examines the clauses watching the negation of a newly true literal.
    fn propagate_literal(&mut self, literal: Literal) -> Option<ClauseKey> {
        let falsified = -literal;

        let mut list = self.watches.take_list(falsified);
        let mut read = 0;
        let mut write = 0;

        while read < list.len() {
            let key = list[read];
            read += 1;

            let clause = self.clause_db.get_mut(key);

            if self.atom_db.is_true(clause.blocker()) {
                list[write] = key;
                write += 1;
                continue;
            }

            let other = clause.other_watch(falsified);
            if self.atom_db.is_true(other) {
                clause.set_blocker(other);
                list[write] = key;
                write += 1;
                continue;
            }

            let mut replacement = None;
            for &candidate in clause.literals() {
                if candidate == clause.watch_a() || candidate == clause.watch_b() {
                    continue;
                }
                if !self.atom_db.is_false(candidate) {
                    replacement = Some(candidate);
                    break;
                }
            }

            match replacement {
                Some(candidate) => {
                    // The clause leaves this list for the replacement's.
                    clause.replace_watch(falsified, candidate);
                    if self.atom_db.is_true(candidate) {
                        clause.set_blocker(candidate);
                    }
                    self.watches.watch(candidate, key);
                }

                None if self.atom_db.is_false(other) => {
                    // Conflict. Keep this clause and the unexamined tail.
                    list[write] = key;
                    write += 1;
                    while read < list.len() {
                        list[write] = list[read];
                        write += 1;
                        read += 1;
                    }
                    list.truncate(write);
                    self.watches.restore_list(falsified, list);

                    return Some(key);
                }

                None => {
                    // Unit: every literal but the other watch is false.
                    list[write] = key;
                    write += 1;
                    self.assign(other, Some(key));
                }
            }
        }

        list.truncate(write);
        self.watches.restore_list(falsified, list);

        None
    }
}
