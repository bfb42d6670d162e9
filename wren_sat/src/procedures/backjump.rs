/*!
Recovery from a conflict: unwinding the trail to an earlier level.

A backjump from level *l* to a target level *t* < *l* pops every assignment
made above *t*, clearing each popped atom's value (and, through the atom
database, lowering the decision search cursor where needed). The propagation
cursor is rewound to the end of level *t*, so an assignment asserted after
the jump is the next thing propagated, and the control stack is truncated so
level *t* is again the top.

Levels, reasons, and stamps of popped atoms are left in place: each is
meaningful only while its atom is assigned.
*/

use crate::{context::Context, db::LevelIndex, misc::log::targets};

impl Context {
    /// Unwinds the trail to the given target level.
    ///
    /// The target must lie below the current level.
    pub fn backtrack(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from level {} to {target}", self.trail.level());

        for literal in self.trail.unwind_to(target).iter().rev() {
            self.atom_db.clear_value(*literal);
        }
    }
}
