/*!
Clauses, as stored in the clause database.

A stored clause is an owned sequence of at least two literals together with a
small header: the two watched literals and a blocker.

- Empty clauses and unit clauses never reach storage; clause
  [ingestion](crate::builder) collapses them into a permanent
  unsatisfiability mark or a root-level assignment.
- The watched literals are always two *distinct* members of the clause.
  Between rounds of [propagation](crate::procedures::bcp) at least one watch
  is not false, unless the clause is unit or conflicting.
- The blocker is a member of the clause used as a cheap satisfaction hint: if
  the blocker is true the clause is satisfied and need not be read at all.
  Any member works, and the blocker is updated opportunistically whenever a
  scan of the clause happens across a true literal.
*/

use crate::structures::literal::Literal;

/// A clause of at least two literals, with its watch slots and blocker.
#[derive(Debug)]
pub struct Clause {
    literals: Vec<Literal>,
    watch_a: Literal,
    watch_b: Literal,
    blocker: Literal,
}

impl Clause {
    /// A clause over the given literals, watching the first two.
    ///
    /// The caller ensures at least two distinct literals are present.
    pub fn new(literals: Vec<Literal>) -> Self {
        debug_assert!(literals.len() >= 2);
        debug_assert!(literals[0] != literals[1]);

        let watch_a = literals[0];
        let watch_b = literals[1];
        let blocker = literals[0];

        Clause {
            literals,
            watch_a,
            watch_b,
            blocker,
        }
    }

    /// The literals of the clause, in storage order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The count of literals in the clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Always false, as empty clauses are never stored.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The first watched literal.
    pub fn watch_a(&self) -> Literal {
        self.watch_a
    }

    /// The second watched literal.
    pub fn watch_b(&self) -> Literal {
        self.watch_b
    }

    /// The blocker literal.
    pub fn blocker(&self) -> Literal {
        self.blocker
    }

    /// The watched literal other than the given (watched) literal.
    pub fn other_watch(&self, literal: Literal) -> Literal {
        debug_assert!(literal == self.watch_a || literal == self.watch_b);
        if self.watch_a == literal {
            self.watch_b
        } else {
            self.watch_a
        }
    }

    /// Moves the watch currently on `falsified` to `replacement`.
    pub fn replace_watch(&mut self, falsified: Literal, replacement: Literal) {
        debug_assert!(self.literals.contains(&replacement));
        debug_assert!(replacement != self.watch_a && replacement != self.watch_b);

        if self.watch_a == falsified {
            self.watch_a = replacement;
        } else {
            debug_assert!(self.watch_b == falsified);
            self.watch_b = replacement;
        }
    }

    /// Notes a literal known to be true as the blocker.
    pub fn set_blocker(&mut self, literal: Literal) {
        debug_assert!(self.literals.contains(&literal));
        self.blocker = literal;
    }

    /// The clause in DIMACS form, e.g. `1 -2 3 0`.
    pub fn as_dimacs(&self) -> String {
        let mut string = String::default();
        for literal in &self.literals {
            string.push_str(format!("{literal} ").as_str());
        }
        string.push('0');
        string
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}
