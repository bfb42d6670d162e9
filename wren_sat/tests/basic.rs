use wren_sat::{
    builder::ClauseOk, config::Config, context::Context, reports::Report,
    structures::literal::Literal,
};

mod basic {
    use super::*;

    fn lits(ints: &[i32]) -> Vec<Literal> {
        ints.iter().map(|&int| Literal::new(int)).collect()
    }

    #[test]
    fn one_literal() {
        let mut ctx = Context::new(1, Config::default());

        assert_eq!(ClauseOk::Unit, ctx.add_clause(lits(&[1])));
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::new(2, Config::default());

        assert_eq!(ClauseOk::Added, ctx.add_clause(lits(&[1, 2])));
        assert_eq!(ClauseOk::Added, ctx.add_clause(lits(&[-1, -2])));
        assert_eq!(ClauseOk::Added, ctx.add_clause(lits(&[1, -2])));
        assert_eq!(ClauseOk::Added, ctx.add_clause(lits(&[-1, 2])));

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::new(2, Config::default());

        ctx.add_clause(lits(&[1, 2]));
        ctx.add_clause(lits(&[-1]));

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
    }

    #[test]
    fn inconsistent_units() {
        let mut ctx = Context::new(1, Config::default());

        assert_eq!(ClauseOk::Unit, ctx.add_clause(lits(&[1])));
        assert_eq!(ClauseOk::Unsatisfiable, ctx.add_clause(lits(&[-1])));

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn duplicate_literals_collapse() {
        let mut ctx = Context::new(2, Config::default());

        // A doubled unit collapses to an assignment, not a stored clause.
        assert_eq!(ClauseOk::Unit, ctx.add_clause(lits(&[1, 1])));
        assert_eq!(ctx.clause_db.count(), 0);

        assert_eq!(ClauseOk::Added, ctx.add_clause(lits(&[2, -1, 2])));
        let stored = ctx.clause_db.clauses().next().unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::new(1, Config::default());

        assert_eq!(ClauseOk::Unsatisfiable, ctx.add_clause(lits(&[])));
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn no_variables() {
        let mut ctx = Context::new(0, Config::default());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(ctx.witness().is_empty());
    }

    #[test]
    fn conflict_budget() {
        let config = Config {
            conflict_limit: Some(0),
            ..Config::default()
        };
        let mut ctx = Context::new(2, config);

        ctx.add_clause(lits(&[1, 2]));
        ctx.add_clause(lits(&[-1, -2]));
        ctx.add_clause(lits(&[-1, 2]));

        // The first decision is blocked by the budget of zero conflicts.
        assert_eq!(ctx.solve(), Report::Unknown);

        ctx.config.conflict_limit = None;
        assert_eq!(ctx.solve(), Report::Satisfiable);
    }
}
