use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("wren")
        .about("Determines whether a formula in DIMACS form is satisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS CNF file to read. The solver reads from stdin if no file is given."))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Do not print any messages."))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .conflicts_with("quiet")
            .help("Print verbose messages."))

        .arg(Arg::new("no_witness")
            .short('n')
            .long("no-witness")
            .action(ArgAction::SetTrue)
            .help("Do not print a witness if the formula is satisfiable."))

        .arg(Arg::new("conflict_limit")
            .short('c')
            .value_name("LIMIT")
            .num_args(1)
            .value_parser(value_parser!(u64))
            .help("Set a conflict limit.")
            .long_help("Set a conflict limit.

The search is abandoned once the limit has been spent, with an unknown
report and the corresponding exit code of 0."))

        .arg(Arg::new("engine")
            .short('e')
            .long("engine")
            .value_name("ENGINE")
            .num_args(1)
            .value_parser(["watched", "occurrence", "dpll"])
            .default_value("watched")
            .help("Select the solver core.")
            .long_help("Select the solver core.

'watched' is clause learning over two watched literals, 'occurrence' is
clause learning over full occurrence lists, and 'dpll' is plain recursive
DPLL with chronological backtracking."))
}
