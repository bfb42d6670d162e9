/*!
A clause-learning core without watched literals.

Propagation here is the plain occurrence-list scheme: when a literal becomes
true, every clause containing its negation is scanned in full, and each scan
classifies the clause as settled (a true literal, or two unassigned),
forcing (one unassigned literal, the rest false), or conflicting (no
literal left). Everything after a conflict --- stamp-guided 1-UIP analysis,
non-chronological backjumping, asserting the learnt clause --- follows the
same construction as the primary [context](crate::context) core; what is
missing is only the watch machinery and learnt-clause minimization.

The cost shows in the propagation counters: each assignment visits every
occurrence of its negation, where the watched core visits only the clauses
whose watches it falsifies.
*/

use crate::{
    cnf::Cnf,
    config::Config,
    context::{ContextState, Counters},
    db::LevelIndex,
    misc::log::targets,
    reports::Report,
    structures::literal::{Atom, Literal, LiteralMap},
};

/// A clause-learning solver with occurrence-list propagation.
pub struct Solver {
    variables: Atom,
    config: Config,

    /// Counters over the solve.
    pub counters: Counters,

    /// The state of the solver.
    pub state: ContextState,

    values: LiteralMap<Option<bool>>,
    matrix: LiteralMap<Vec<usize>>,
    clauses: Vec<Vec<Literal>>,

    levels: Vec<LevelIndex>,
    reasons: Vec<Option<usize>>,
    stamps: Vec<u64>,

    trail: Vec<Literal>,
    control: Vec<usize>,
    propagated: usize,
    search: Atom,
}

impl Solver {
    /// A fresh solver over atoms 1..=`variables`.
    pub fn new(variables: Atom, config: Config) -> Self {
        let size = variables as usize + 1;

        Solver {
            variables,
            config,
            counters: Counters::default(),
            state: ContextState::Input,
            values: LiteralMap::new(variables),
            matrix: LiteralMap::new(variables),
            clauses: Vec::default(),
            levels: vec![0; size],
            reasons: vec![None; size],
            stamps: vec![0; size],
            trail: Vec::with_capacity(variables as usize),
            control: Vec::default(),
            propagated: 0,
            search: 1,
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
    pub fn add_clause(&mut self, literals: Vec<Literal>) {
        self.counters.added += 1;

        for &literal in &literals {
            self.matrix[literal].push(self.clauses.len());
        }

        match literals.as_slice() {
            [] => {
                log::info!(target: targets::INGESTION, "Ingested an empty clause");
                self.state = ContextState::Unsatisfiable;
            }

            [unit] => match self.values[*unit] {
                None => self.assign(*unit, None),
                Some(true) => {}
                Some(false) => {
                    log::info!(target: targets::INGESTION, "Ingested an inconsistent unit clause {unit}");
                    self.state = ContextState::Unsatisfiable;
                }
            },

            _ => {}
        }

        self.clauses.push(literals);
    }

    /// Determines the satisfiability of the added clauses.
    pub fn solve(&mut self) -> Report {
        match self.state {
            ContextState::Unsatisfiable | ContextState::Satisfiable => {
                return Report::from(&self.state)
            }
            ContextState::Input | ContextState::Exhausted => self.state = ContextState::Input,
        }

        loop {
            match self.propagate() {
                Some(conflict) => {
                    if self.level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        break;
                    }
                    self.analyze(conflict);
                }

                None => {
                    if self.trail.len() == self.variables as usize {
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

        Report::from(&self.state)
    }

    /// A full witness for the current valuation.
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

    fn level(&self) -> LevelIndex {
        self.control.len() as LevelIndex
    }

    fn assign(&mut self, literal: Literal, reason: Option<usize>) {
        debug_assert!(self.values[literal].is_none());

        self.values[literal] = Some(true);
        self.values[-literal] = Some(false);

        let atom = literal.atom() as usize;
        self.levels[atom] = self.level();
        self.reasons[atom] = reason;

        self.trail.push(literal);
    }

    /// Propagates every unpropagated assignment, returning the index of a
    /// conflicting clause if one is found.
    fn propagate(&mut self) -> Option<usize> {
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
                        return Some(clause_index);
                    }

                    Some(unit) => self.assign(unit, Some(clause_index)),
                }
            }
        }
        None
    }

    fn decide(&mut self) {
        self.counters.decisions += 1;

        while self.values[Literal::of_atom(self.search, true)].is_some() {
            debug_assert!(self.search <= self.variables);
            self.search += 1;
        }
        let atom = self.search;

        log::trace!(target: targets::DECISION, "Decide {atom} at level {}", self.level() + 1);

        self.control.push(self.trail.len());
        self.stamps[atom as usize] = 0;
        self.assign(Literal::of_atom(atom, true), None);
    }

    fn backtrack(&mut self, target: LevelIndex) {
        debug_assert!(target < self.level());

        let mark = self.control[target as usize];
        while self.trail.len() > mark {
            if let Some(literal) = self.trail.pop() {
                self.values[literal] = None;
                self.values[-literal] = None;

                let atom = literal.atom();
                if atom < self.search {
                    self.search = atom;
                }
            }
        }

        self.control.truncate(target as usize);
        self.propagated = mark;
    }

    /// Marks a literal during analysis, unless fixed or already marked.
    fn mark(
        &mut self,
        literal: Literal,
        stamp: u64,
        conflict_level: LevelIndex,
        current: &mut usize,
        lower: &mut usize,
    ) {
        let atom = literal.atom() as usize;
        let level = self.levels[atom];

        if level == 0 || self.stamps[atom] == stamp {
            return;
        }

        debug_assert!(self.values[literal] == Some(false));
        self.stamps[atom] = stamp;

        if level == conflict_level {
            *current += 1;
        } else {
            *lower += 1;
        }
    }

    /// Learns a 1-UIP clause from the conflict, backjumps, and asserts.
    ///
    /// The construction is that of the watched core's
    /// [analysis](crate::procedures::analysis), without minimization.
    fn analyze(&mut self, conflict: usize) {
        let conflict_level = self.level();
        let stamp = self.counters.conflicts;
        debug_assert!(conflict_level > 0);

        log::info!(target: targets::ANALYSIS, "Analysis of clause {conflict} at level {conflict_level}");

        let mut learnt: Vec<Literal> = Vec::default();
        let mut backjump_level: LevelIndex = 0;
        let mut current: usize = 0;
        let mut lower: usize = 0;

        for index in 0..self.clauses[conflict].len() {
            let literal = self.clauses[conflict][index];
            self.mark(literal, stamp, conflict_level, &mut current, &mut lower);
        }
        debug_assert!(current >= 1);

        let mut cursor = self.trail.len();

        while current > 1 {
            cursor -= 1;
            let literal = self.trail[cursor];

            if self.stamps[literal.atom() as usize] != stamp {
                continue;
            }

            if let Some(reason) = self.reasons[literal.atom() as usize] {
                for index in 0..self.clauses[reason].len() {
                    let other = self.clauses[reason][index];
                    self.mark(other, stamp, conflict_level, &mut current, &mut lower);
                }
            }

            current -= 1;
        }

        while self.stamps[self.trail[cursor - 1].atom() as usize] != stamp {
            cursor -= 1;
        }
        let uip = self.trail[cursor - 1];
        cursor -= 1;

        while lower > 0 {
            cursor -= 1;
            let literal = self.trail[cursor];

            if self.stamps[literal.atom() as usize] == stamp {
                learnt.push(-literal);

                let level = self.levels[literal.atom() as usize];
                if level > backjump_level {
                    backjump_level = level;
                }

                lower -= 1;
            }
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
            learnt.push(asserted);

            self.counters.added += 1;
            let clause_index = self.clauses.len();
            for &literal in &learnt {
                self.matrix[literal].push(clause_index);
            }
            self.clauses.push(learnt);

            self.assign(asserted, Some(clause_index));
        }
    }
}
