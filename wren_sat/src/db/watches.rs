/*!
Watch lists: which clauses are watching which literal.

Each literal has a list of keys to clauses currently watching it.
[Propagation](crate::procedures::bcp) walks the list of the negation of a
newly assigned literal, and while doing so may both drop entries from the
walked list (a replacement watch was found elsewhere in the clause) and push
entries onto the lists of *other* literals (the replacement itself).

To keep that mutation simple the walked list is taken out of the database for
the duration of the walk and restored, compacted, afterwards. The clause
being examined can never be pushed back onto the taken list: a replacement
watch is by construction not false, while every watch being walked is.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{Atom, Literal, LiteralMap},
};

/// Per-literal lists of watching clauses.
#[derive(Debug)]
pub struct Watches {
    lists: LiteralMap<Vec<ClauseKey>>,
}

impl Watches {
    pub fn new(variables: Atom) -> Self {
        Watches {
            lists: LiteralMap::new(variables),
        }
    }

    /// Notes that the given clause watches the given literal.
    pub fn watch(&mut self, literal: Literal, key: ClauseKey) {
        self.lists[literal].push(key);
    }

    /// The clauses watching a literal.
    pub fn list(&self, literal: Literal) -> &[ClauseKey] {
        &self.lists[literal]
    }

    /// Detaches the watch list of a literal for iteration under mutation.
    pub fn take_list(&mut self, literal: Literal) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[literal])
    }

    /// Restores a list detached with [take_list](Watches::take_list).
    pub fn restore_list(&mut self, literal: Literal, list: Vec<ClauseKey>) {
        debug_assert!(self.lists[literal].is_empty());
        self.lists[literal] = list;
    }
}
