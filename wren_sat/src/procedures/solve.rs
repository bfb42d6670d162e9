/*!
The solve loop.

Propagation runs until it settles or conflicts:

- A conflict at the root refutes the formula.
- Any other conflict is analysed, with the learnt clause installed and its
  assertion queued for the next round of propagation.
- A full trail with no conflict satisfies the formula.
- Otherwise, unless the conflict budget is spent, a decision extends the
  trail and the loop continues.

```none
           +--------+   conflict at the root   +-------+
     +---->|propagate|------------------------>| UNSAT |
     |     +--------+                          +-------+
     |       |    |
     |       |    |  no conflict, trail full   +-----+
     |       |    +--------------------------->| SAT |
     |       |                                 +-----+
     |       | conflict
     |       v
     |   +---------+
     |   | analyse |  learn, backjump, assert
     |   +---------+
     |       |
     +-------+------ otherwise, decide and repeat
```

Between iterations the loop holds the only mutable view of the databases;
the procedure is strictly sequential and two solves of one formula under one
configuration agree on every trail, clause, and counter.
*/

use crate::{
    context::{Context, ContextState},
    reports::Report,
};

impl Context {
    /// Determines the satisfiability of the added clauses.
    ///
    /// Solving is resumable: when the conflict budget of the configuration
    /// runs out the search stops with [Report::Unknown], and a further call
    /// with a raised budget continues from where the search left off.
    pub fn solve(&mut self) -> Report {
        match self.state {
            ContextState::Unsatisfiable | ContextState::Satisfiable => return self.report(),
            ContextState::Input | ContextState::Exhausted => self.state = ContextState::Input,
        }

        loop {
            match self.propagate() {
                Some(conflict) => {
                    if self.trail.level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        break;
                    }
                    self.analyze(conflict);
                }

                None => {
                    if self.trail.assignment_count() == self.atom_db.variable_count() as usize {
                        self.state = ContextState::Satisfiable;
                        break;
                    }

                    if let Some(limit) = self.config.conflict_limit {
                        if self.counters.conflicts >= limit {
                            self.state = ContextState::Exhausted;
                            break;
                        }
                    }

                    self.decide();
                }
            }
        }

        self.report()
    }
}
