//! Invariants of the watched core, observed through the public API after
//! solves.

use std::collections::{HashMap, HashSet};

use wren_sat::{
    cnf::Cnf, config::Config, context::Context, reports::Report, structures::literal::Literal,
};
use wren_tests::{pigeonhole, uniform_random_3sat};

/// The first seeded instance at an easy ratio the solver finds satisfiable,
/// solved, so its trail and valuation are populated.
fn first_satisfiable() -> (Cnf, Context) {
    for seed in 0..64 {
        let cnf = uniform_random_3sat(20, 60, seed);
        let mut ctx = Context::from_cnf(&cnf, Config::default());
        if ctx.solve() == Report::Satisfiable {
            return (cnf, ctx);
        }
    }
    panic!("no satisfiable instance among the seeds");
}

#[test]
fn polarity_duality() {
    let (cnf, ctx) = first_satisfiable();

    for atom in 1..=cnf.variables {
        let literal = Literal::of_atom(atom, true);
        match ctx.atom_db.value_of(literal) {
            Some(value) => assert_eq!(ctx.atom_db.value_of(-literal), Some(!value)),
            None => assert_eq!(ctx.atom_db.value_of(-literal), None),
        }
    }
}

#[test]
fn trail_uniqueness_and_level_monotonicity() {
    let (_, ctx) = first_satisfiable();

    let mut seen = HashSet::new();
    for literal in ctx.trail.assignments() {
        assert!(seen.insert(literal.atom()));
    }

    let levels: Vec<_> = ctx
        .trail
        .assignments()
        .iter()
        .map(|literal| ctx.atom_db.level_of(literal.atom()))
        .collect();
    assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn control_stack_marks_decisions() {
    let (_, ctx) = first_satisfiable();

    for (index, &start) in ctx.trail.level_boundaries().iter().enumerate() {
        let decision = ctx.trail.assignments()[start];

        assert_eq!(ctx.atom_db.reason_of(decision.atom()), None);
        assert_eq!(ctx.atom_db.level_of(decision.atom()), (index + 1) as u32);
    }
}

#[test]
fn reasons_are_sound() {
    let (_, ctx) = first_satisfiable();

    let position: HashMap<u32, usize> = ctx
        .trail
        .assignments()
        .iter()
        .enumerate()
        .map(|(index, literal)| (literal.atom(), index))
        .collect();

    for (index, literal) in ctx.trail.assignments().iter().enumerate() {
        let Some(reason) = ctx.atom_db.reason_of(literal.atom()) else {
            continue;
        };

        for &other in ctx.clause_db.get(reason).literals() {
            if other == *literal {
                assert!(ctx.atom_db.is_true(other));
            } else {
                assert!(ctx.atom_db.is_false(other));
                assert!(position[&other.atom()] < index);
            }
        }
    }
}

#[test]
fn watches_are_distinct_members() {
    // An unsatisfiable solve, so learnt clauses are in the mix.
    let mut ctx = Context::from_cnf(&pigeonhole(4, 3), Config::default());
    assert_eq!(ctx.solve(), Report::Unsatisfiable);

    for clause in ctx.clause_db.clauses() {
        assert_ne!(clause.watch_a(), clause.watch_b());
        assert!(clause.literals().contains(&clause.watch_a()));
        assert!(clause.literals().contains(&clause.watch_b()));
        assert!(clause.literals().contains(&clause.blocker()));
    }

    // Each stored clause appears in the lists of exactly its two watches.
    let mut appearances: HashMap<wren_sat::db::ClauseKey, usize> = HashMap::new();
    for atom in 1..=12 {
        for literal in [Literal::of_atom(atom, true), Literal::of_atom(atom, false)] {
            for &key in ctx.watches.list(literal) {
                let clause = ctx.clause_db.get(key);
                assert!(clause.watch_a() == literal || clause.watch_b() == literal);
                *appearances.entry(key).or_default() += 1;
            }
        }
    }
    assert_eq!(appearances.len(), ctx.clause_db.count());
    assert!(appearances.values().all(|&count| count == 2));
}

#[test]
fn learnt_clauses_preserve_the_answer() {
    // Unsatisfiable: re-solving with every learnt clause as an original
    // preserves the refutation.
    let cnf = pigeonhole(4, 3);
    let mut ctx = Context::from_cnf(&cnf, Config::default());
    assert_eq!(ctx.solve(), Report::Unsatisfiable);

    let mut enriched = cnf.clone();
    for clause in ctx.clause_db.clauses() {
        enriched.clauses.push(clause.literals().to_vec());
    }

    let mut again = Context::from_cnf(&enriched, Config::default());
    assert_eq!(again.solve(), Report::Unsatisfiable);

    // Satisfiable: clauses learnt under a tight budget do not change the
    // answer once the budget is lifted.
    let cnf = (0..64)
        .map(|seed| uniform_random_3sat(20, 85, seed))
        .find(|cnf| {
            Context::from_cnf(cnf, Config::default()).solve() == Report::Satisfiable
        })
        .expect("no satisfiable instance among the seeds");

    let mut budgeted = Context::from_cnf(
        &cnf,
        Config {
            conflict_limit: Some(3),
            ..Config::default()
        },
    );
    budgeted.solve();

    let mut enriched = cnf.clone();
    for clause in budgeted.clause_db.clauses() {
        enriched.clauses.push(clause.literals().to_vec());
    }

    let mut again = Context::from_cnf(&enriched, Config::default());
    assert_eq!(again.solve(), Report::Satisfiable);
}
