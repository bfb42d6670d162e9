//! Pigeonhole formulas: unsatisfiable, and settled only through conflicts.

use wren_sat::{config::Config, context::Context, reports::Report};
use wren_tests::{pigeonhole, unanimous_report, watched_report};

#[test]
fn three_pigeons_two_holes() {
    let cnf = pigeonhole(3, 2);

    let mut ctx = Context::from_cnf(&cnf, Config::default());
    assert_eq!(ctx.solve(), Report::Unsatisfiable);

    // The refuting conflict is at the root, so any earlier conflict was
    // analysed and followed by a backjump.
    assert!(ctx.counters.conflicts >= 2);
    assert!(ctx.counters.backjumps <= ctx.counters.conflicts);
}

#[test]
fn all_cores_refute_small_holes() {
    for pigeons in 2..=4 {
        let cnf = pigeonhole(pigeons, pigeons - 1);
        assert_eq!(unanimous_report(&cnf), Report::Unsatisfiable);
    }
}

#[test]
fn satisfiable_when_holes_suffice() {
    for pigeons in 2..=4 {
        let cnf = pigeonhole(pigeons, pigeons);
        assert_eq!(unanimous_report(&cnf), Report::Satisfiable);
    }
}

#[test]
fn five_pigeons_four_holes() {
    let cnf = pigeonhole(5, 4);
    assert_eq!(watched_report(&cnf, &Config::default()), Report::Unsatisfiable);
}
