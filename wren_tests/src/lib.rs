/*!
Shared helpers for the wren test suites: formula builders, generators, and
per-core solve wrappers which check any model they report.
*/

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

use wren_sat::{
    cnf::Cnf,
    config::Config,
    context::Context,
    engines,
    reports::Report,
    structures::literal::{Atom, Literal},
};

/// Reads a formula from a DIMACS string, panicking on malformed input.
pub fn cnf_of(dimacs: &str) -> Cnf {
    match Cnf::read(dimacs.as_bytes()) {
        Ok(cnf) => cnf,
        Err(e) => panic!("malformed formula: {e}"),
    }
}

/// Panics if the witness leaves some clause of the formula unsatisfied.
pub fn assert_witness(cnf: &Cnf, witness: &[Literal]) {
    if let Some(clause) = cnf.unsatisfied_clause(witness) {
        panic!("unsatisfied clause: {clause:?}");
    }
}

/// Solves with the watched-literal core, checking any model found.
pub fn watched_report(cnf: &Cnf, config: &Config) -> Report {
    let mut ctx = Context::from_cnf(cnf, config.clone());
    let report = ctx.solve();
    if report == Report::Satisfiable {
        assert_witness(cnf, &ctx.witness());
    }
    report
}

/// Solves with the occurrence-list core, checking any model found.
pub fn occurrence_report(cnf: &Cnf, config: &Config) -> Report {
    let mut solver = engines::occurrence::Solver::from_cnf(cnf, config.clone());
    let report = solver.solve();
    if report == Report::Satisfiable {
        assert_witness(cnf, &solver.witness());
    }
    report
}

/// Solves with the DPLL core, checking any model found.
pub fn dpll_report(cnf: &Cnf, config: &Config) -> Report {
    let mut solver = engines::dpll::Solver::from_cnf(cnf, config.clone());
    let report = solver.solve();
    if report == Report::Satisfiable {
        assert_witness(cnf, &solver.witness());
    }
    report
}

/// Solves with every core and requires all three to agree.
pub fn unanimous_report(cnf: &Cnf) -> Report {
    let config = Config::default();

    let watched = watched_report(cnf, &config);
    assert_eq!(watched, occurrence_report(cnf, &config));
    assert_eq!(watched, dpll_report(cnf, &config));

    watched
}

/// The pigeonhole formula PHP(`pigeons`, `holes`) in the standard encoding:
/// every pigeon sits in some hole, and no two pigeons share a hole.
///
/// Unsatisfiable whenever `pigeons` exceeds `holes`.
pub fn pigeonhole(pigeons: u32, holes: u32) -> Cnf {
    let variable =
        |pigeon: u32, hole: u32| Literal::of_atom((pigeon - 1) * holes + hole, true);

    let mut clauses = Vec::default();

    for pigeon in 1..=pigeons {
        clauses.push((1..=holes).map(|hole| variable(pigeon, hole)).collect());
    }

    for hole in 1..=holes {
        for first in 1..=pigeons {
            for second in (first + 1)..=pigeons {
                clauses.push(vec![-variable(first, hole), -variable(second, hole)]);
            }
        }
    }

    Cnf {
        variables: pigeons * holes,
        clauses,
    }
}

/// A uniform random 3-SAT formula: each clause holds three distinct atoms
/// with independently chosen polarities.
///
/// Generation is seeded, so one (`variables`, `clauses`, `seed`) triple
/// names one formula, run after run.
pub fn uniform_random_3sat(variables: Atom, clauses: usize, seed: u64) -> Cnf {
    debug_assert!(variables >= 3);

    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    let mut formula = Vec::with_capacity(clauses);

    for _ in 0..clauses {
        let mut atoms: Vec<Atom> = Vec::with_capacity(3);
        while atoms.len() < 3 {
            let atom = rng.random_range(1..=variables);
            if !atoms.contains(&atom) {
                atoms.push(atom);
            }
        }

        formula.push(
            atoms
                .into_iter()
                .map(|atom| Literal::of_atom(atom, rng.random_bool(0.5)))
                .collect(),
        );
    }

    Cnf {
        variables,
        clauses: formula,
    }
}
