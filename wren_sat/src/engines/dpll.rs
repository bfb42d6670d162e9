/*!
A recursive DPLL core with chronological backtracking.

The procedure alternates propagation and decision. Propagation walks the
occurrence list of the negation of each newly assigned literal and scans
each listed clause in full: a clause with a true literal is settled, a
clause with two unassigned literals is untouched, a clause with one
unassigned literal forces it, and a clause with none conflicts. A conflict
abandons the branch; the caller backtracks one level and tries the negation
of its decision. The formula is satisfied once every clause holds a true
literal --- which, unlike the clause-learning cores, may leave atoms
unassigned.
*/

use crate::{
    cnf::Cnf,
    config::Config,
    context::Counters,
    misc::log::targets,
    reports::Report,
    structures::literal::{Atom, Literal, LiteralMap},
};

/// A recursive DPLL solver over a fixed range of atoms.
pub struct Solver {
    variables: Atom,
    config: Config,

    /// Counters over the solve. Backjumps always remain zero, as
    /// backtracking is chronological.
    pub counters: Counters,

    values: LiteralMap<Option<bool>>,
    matrix: LiteralMap<Vec<usize>>,
    clauses: Vec<Vec<Literal>>,

    trail: Vec<Literal>,
    control: Vec<usize>,
    propagated: usize,

    unsatisfiable: bool,
}

impl Solver {
    /// A fresh solver over atoms 1..=`variables`.
    pub fn new(variables: Atom, config: Config) -> Self {
        Solver {
            variables,
            config,
            counters: Counters::default(),
            values: LiteralMap::new(variables),
            matrix: LiteralMap::new(variables),
            clauses: Vec::default(),
            trail: Vec::with_capacity(variables as usize),
            control: Vec::default(),
            propagated: 0,
            unsatisfiable: false,
        }
    }

    /// A solver holding the given formula.
    pub fn from_cnf(cnf: &Cnf, config: Config) -> Self {
        let mut solver = Solver::new(cnf.variables, config);
        for clause in &cnf.clauses {
            solver.add_clause(clause.clone());
        }
        solver
    }

    /// Installs a clause, connecting each literal in the occurrence lists.
    ///
    /// An empty clause, or a unit clause whose literal is already false,
    /// marks the formula unsatisfiable.
    pub fn add_clause(&mut self, literals: Vec<Literal>) {
        self.counters.added += 1;

        for &literal in &literals {
            self.matrix[literal].push(self.clauses.len());
        }

        match literals.as_slice() {
            [] => {
                log::info!(target: targets::INGESTION, "Ingested an empty clause");
                self.unsatisfiable = true;
            }

            [unit] => match self.values[*unit] {
                None => self.assign(*unit),
                Some(true) => {}
                Some(false) => {
                    log::info!(target: targets::INGESTION, "Ingested an inconsistent unit clause {unit}");
                    self.unsatisfiable = true;
                }
            },

            _ => {}
        }

        self.clauses.push(literals);
    }

    /// Determines the satisfiability of the added clauses.
    pub fn solve(&mut self) -> Report {
        if self.unsatisfiable {
            return Report::Unsatisfiable;
        }
        self.search()
    }

    /// A full witness for the current valuation, unassigned atoms positive.
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

    fn search(&mut self) -> Report {
        loop {
            if !self.propagate() {
                return Report::Unsatisfiable;
            }

            if self.satisfied() {
                return Report::Satisfiable;
            }

            if let Some(limit) = self.config.conflict_limit {
                if self.counters.conflicts >= limit {
                    return Report::Unknown;
                }
            }

            let decision = self.decide();
            match self.search() {
                Report::Unsatisfiable => {
                    self.backtrack();
                    self.assign(-decision);
                }

                report => return report,
            }
        }
    }

    /// Propagates every unpropagated assignment; false on conflict.
    fn propagate(&mut self) -> bool {
        while self.propagated < self.trail.len() {
            self.counters.propagations += 1;
            let falsified = -self.trail[self.propagated];
            self.propagated += 1;

            let mut index = 0;
            while index < self.matrix[falsified].len() {
                let clause_index = self.matrix[falsified][index];
                index += 1;

                let mut forced = None;
                let mut settled = false;

                for &other in &self.clauses[clause_index] {
                    match self.values[other] {
                        Some(false) => continue,

                        Some(true) => {
                            settled = true;
                            break;
                        }

                        None => {
                            if forced.is_some() {
                                // Two unassigned literals.
                                settled = true;
                                break;
                            }
                            forced = Some(other);
                        }
                    }
                }

                if settled {
                    continue;
                }

                match forced {
                    None => {
                        self.counters.conflicts += 1;
                        log::trace!(target: targets::PROPAGATION, "Conflict in clause {clause_index}");
                        return false;
                    }

                    Some(unit) => self.assign(unit),
                }
            }
        }
        true
    }

    fn satisfied(&self) -> bool {
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|&literal| self.values[literal] == Some(true))
        })
    }

    fn assign(&mut self, literal: Literal) {
        debug_assert!(self.values[literal].is_none());

        self.values[literal] = Some(true);
        self.values[-literal] = Some(false);
        self.trail.push(literal);
    }

    fn decide(&mut self) -> Literal {
        self.counters.decisions += 1;

        let mut atom = 1;
        while self.values[Literal::of_atom(atom, true)].is_some() {
            debug_assert!(atom <= self.variables);
            atom += 1;
        }

        log::trace!(target: targets::DECISION, "Decide {atom}");
        self.control.push(self.trail.len());

        let literal = Literal::of_atom(atom, true);
        self.assign(literal);
        literal
    }

    fn backtrack(&mut self) {
        let mark = match self.control.pop() {
            Some(mark) => mark,
            None => return,
        };

        while self.trail.len() > mark {
            if let Some(literal) = self.trail.pop() {
                self.values[literal] = None;
                self.values[-literal] = None;
            }
        }

        self.propagated = mark;
    }
}
