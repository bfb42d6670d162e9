/*!
The atom database: the valuation, and what is known about each atom.

Stored per atom:

- A truth value, kept per *literal* so that the value of a literal and of its
  negation are each a single lookup. The two entries are always duals: if ℓ
  is true then -ℓ is false, and both are unassigned exactly when the atom is.
- The decision level the atom was assigned at.
- The reason for the assignment: the key of the clause which forced it, or
  nothing for a decision or a root-level assignment.
- A stamp, holding the number of the conflict during which the atom was last
  marked by [analysis](crate::procedures::analysis). Comparing the stamp with
  the current conflict count answers "was this atom marked during *this*
  analysis?" in constant time, with no per-analysis reset.

The database also tracks the search cursor of the
[decision procedure](crate::procedures::decision) --- all atoms below the
cursor are assigned --- and the count of atoms fixed at the root level.
*/

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::literal::{Atom, Literal, LiteralMap},
};

/// Truth values and per-atom records for a fixed range of atoms.
#[derive(Debug)]
pub struct AtomDB {
    variables: Atom,
    values: LiteralMap<Option<bool>>,
    levels: Vec<LevelIndex>,
    reasons: Vec<Option<ClauseKey>>,
    stamps: Vec<u64>,
    search: Atom,
    fixed: usize,
}

impl AtomDB {
    /// A database for atoms 1..=`variables`, all unassigned.
    pub fn new(variables: Atom) -> Self {
        let size = variables as usize + 1;

        AtomDB {
            variables,
            values: LiteralMap::new(variables),
            levels: vec![0; size],
            reasons: vec![None; size],
            stamps: vec![0; size],
            search: 1,
            fixed: 0,
        }
    }

    /// The count of atoms in the database.
    pub fn variable_count(&self) -> Atom {
        self.variables
    }

    /// The value of a literal: true, false, or unassigned.
    pub fn value_of(&self, literal: Literal) -> Option<bool> {
        self.values[literal]
    }

    pub fn is_true(&self, literal: Literal) -> bool {
        self.values[literal] == Some(true)
    }

    pub fn is_false(&self, literal: Literal) -> bool {
        self.values[literal] == Some(false)
    }

    pub fn is_unassigned(&self, literal: Literal) -> bool {
        self.values[literal].is_none()
    }

    /// Values a literal true (and its negation false) at the given level with
    /// the given reason.
    ///
    /// The atom must be unassigned.
    pub fn set_value(&mut self, literal: Literal, level: LevelIndex, reason: Option<ClauseKey>) {
        debug_assert!(self.is_unassigned(literal));

        self.values[literal] = Some(true);
        self.values[-literal] = Some(false);

        let atom = literal.atom() as usize;
        self.levels[atom] = level;
        self.reasons[atom] = reason;

        if level == 0 {
            self.fixed += 1;
        }
    }

    /// Clears the value of a literal and of its negation, lowering the search
    /// cursor if the freed atom sits below it.
    pub fn clear_value(&mut self, literal: Literal) {
        debug_assert!(!self.is_unassigned(literal));

        self.values[literal] = None;
        self.values[-literal] = None;

        let atom = literal.atom();
        if atom < self.search {
            self.search = atom;
        }
    }

    /// The level an atom was assigned at.
    ///
    /// Valid only while the atom is assigned.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize]
    }

    /// The clause which forced the assignment of an atom, if any.
    ///
    /// Valid only while the atom is assigned.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// The stamp of an atom.
    pub fn stamp_of(&self, atom: Atom) -> u64 {
        self.stamps[atom as usize]
    }

    /// Resets the stamp of an atom.
    ///
    /// Called when an atom is chosen as a decision, as the stamp field is
    /// reused across analyses.
    pub fn clear_stamp(&mut self, atom: Atom) {
        self.stamps[atom as usize] = 0;
    }

    /// Marks a literal during conflict analysis, unless the literal is fixed
    /// or already marked.
    ///
    /// A fresh mark at `conflict_level` increments `current`, a fresh mark at
    /// any other (lower) level increments `lower`.
    pub fn mark(
        &mut self,
        literal: Literal,
        stamp: u64,
        conflict_level: LevelIndex,
        current: &mut usize,
        lower: &mut usize,
    ) {
        let atom = literal.atom();
        let level = self.level_of(atom);

        if level == 0 || self.stamps[atom as usize] == stamp {
            return;
        }

        debug_assert!(self.is_false(literal));
        self.stamps[atom as usize] = stamp;

        if level == conflict_level {
            *current += 1;
        } else {
            *lower += 1;
        }
    }

    /// Advances the search cursor to the lowest-indexed unassigned atom and
    /// returns that atom.
    ///
    /// The caller ensures some atom is unassigned.
    pub fn next_unassigned(&mut self) -> Atom {
        while !self.is_unassigned(Literal::of_atom(self.search, true)) {
            debug_assert!(self.search <= self.variables);
            self.search += 1;
        }
        self.search
    }

    /// The count of atoms assigned at the root level.
    pub fn fixed_count(&self) -> usize {
        self.fixed
    }

    /// The count of atoms not assigned at the root level.
    pub fn remaining_count(&self) -> usize {
        self.variables as usize - self.fixed
    }

    /// The valuation as a full witness: one literal per atom, negative if the
    /// atom is false, positive otherwise.
    pub fn witness(&self) -> Vec<Literal> {
        (1..=self.variables)
            .map(|atom| {
                let positive = Literal::of_atom(atom, true);
                match self.values[positive] {
                    Some(false) => -positive,
                    _ => positive,
                }
            })
            .collect()
    }
}
