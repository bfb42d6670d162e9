/*!
Choosing an atom to value when propagation settles without conflict.

The heuristic is the simplest fully reproducible one: value the
lowest-indexed unassigned atom, positively. The search cursor over atoms
never rescans from the start --- every atom below the cursor is assigned, and
[backjumping](crate::procedures::backjump) lowers the cursor whenever it
frees an atom below it.

Valuing an atom opens a fresh decision level, recorded as the current height
of the trail. The chosen atom's analysis stamp is reset, as the stamp field
is reused from one analysis to the next.
*/

use crate::{context::Context, misc::log::targets, structures::literal::Literal};

impl Context {
    /// Opens a fresh decision level and values the lowest-indexed unassigned
    /// atom, positively.
    ///
    /// The caller ensures some atom is unassigned.
    pub fn decide(&mut self) {
        self.counters.decisions += 1;

        let atom = self.atom_db.next_unassigned();
        log::trace!(target: targets::DECISION, "Decide {atom} at level {}", self.trail.level() + 1);

        self.trail.open_level();
        self.atom_db.clear_stamp(atom);
        self.assign(Literal::of_atom(atom, true), None);

        if self.counters.decisions.is_power_of_two() {
            if let Some(callback) = self.progress.as_mut() {
                callback(&self.counters, self.atom_db.remaining_count());
            }
        }
    }
}
