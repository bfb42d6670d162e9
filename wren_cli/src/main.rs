mod cli;

use std::{cell::RefCell, path::PathBuf, rc::Rc, time::Instant};

use wren_sat::{
    cnf::Cnf,
    config::Config,
    context::{Context, Counters},
    engines,
    reports::Report,
    structures::literal::Literal,
    types::err::ErrorKind,
};

/// Messages on stdout, gated by verbosity and prefixed with `c ` so output
/// remains a valid solver transcript.
#[derive(Clone, Copy)]
struct Output {
    /// -1 quiet, 0 normal, 1 verbose.
    verbosity: i32,
}

impl Output {
    fn message(&self, text: &str) {
        if self.verbosity >= 0 {
            println!("c {text}");
        }
    }

    fn verbose(&self, text: &str) {
        if self.verbosity >= 1 {
            println!("c {text}");
        }
    }

    fn line(&self) {
        if self.verbosity >= 0 {
            println!("c");
        }
    }
}

fn die(text: &str) -> ! {
    eprintln!("wren: error: {text}");
    std::process::exit(1);
}

/// The progress table, one row per report with a header every twenty rows.
struct Progress {
    output: Output,
    start: Instant,
    variables: u32,
    rows: u64,
}

impl Progress {
    fn row(&mut self, kind: char, counters: &Counters, remaining: usize) {
        if self.output.verbosity < 0 {
            return;
        }

        if self.rows % 20 == 0 {
            println!("c");
            println!("c              decisions              variables");
            println!("c   seconds                 conflicts           remaining");
            println!("c");
        }
        self.rows += 1;

        let percent = if self.variables != 0 {
            100.0 * remaining as f64 / self.variables as f64
        } else {
            0.0
        };

        println!(
            "c {} {:7.2} {:12} {:12} {:9} {:3.0}%",
            kind,
            self.start.elapsed().as_secs_f64(),
            counters.decisions,
            counters.conflicts,
            remaining,
            percent,
        );
    }
}

fn average(a: f64, b: f64) -> f64 {
    if b != 0.0 {
        a / b
    } else {
        0.0
    }
}

fn percent(a: f64, b: f64) -> f64 {
    average(100.0 * a, b)
}

fn print_statistics(output: &Output, counters: &Counters, elapsed: f64) {
    output.line();
    output.message(&format!(
        "{:<15} {:16} {:12.2} per second",
        "conflicts:",
        counters.conflicts,
        average(counters.conflicts as f64, elapsed),
    ));
    output.message(&format!(
        "{:<15} {:16} {:12.2} per second",
        "decisions:",
        counters.decisions,
        average(counters.decisions as f64, elapsed),
    ));
    output.message(&format!(
        "{:<15} {:16} {:12.2} % conflicts",
        "backjumps:",
        counters.backjumps,
        percent(counters.backjumps as f64, counters.conflicts as f64),
    ));
    output.message(&format!(
        "{:<15} {:16} {:12.2} million per second",
        "propagations:",
        counters.propagations,
        average(counters.propagations as f64 * 1e-6, elapsed),
    ));
    output.line();
    output.message(&format!("{:<15} {:16.2} seconds", "process-time:", elapsed));
    output.line();
}

fn print_witness(witness: &[Literal]) {
    let mut line = String::from("v ");
    for literal in witness {
        line.push_str(&format!("{literal} "));
    }
    line.push('0');
    println!("{line}");
}

fn main() {
    env_logger::init();

    let matches = cli::cli().get_matches();

    let output = Output {
        verbosity: if matches.get_flag("quiet") {
            -1
        } else if matches.get_flag("verbose") {
            1
        } else {
            0
        },
    };
    let show_witness = !matches.get_flag("no_witness");
    let engine = matches
        .get_one::<String>("engine")
        .map(String::as_str)
        .unwrap_or("watched")
        .to_string();
    let config = Config {
        conflict_limit: matches.get_one::<u64>("conflict_limit").copied(),
        ..Config::default()
    };

    let start = Instant::now();

    output.message("wren CDCL SAT solver");
    output.line();

    let (name, cnf) = match matches.get_one::<PathBuf>("path") {
        Some(path) => {
            let name = path.display().to_string();
            output.message(&format!("reading from '{name}'"));
            (name, Cnf::from_path(path))
        }

        None => {
            output.message("reading from '<stdin>'");
            (
                String::from("<stdin>"),
                Cnf::read(std::io::stdin().lock()).map_err(ErrorKind::from),
            )
        }
    };

    let cnf = match cnf {
        Ok(cnf) => cnf,
        Err(ErrorKind::Io(_)) => die(&format!("could not open and read '{name}'")),
        Err(e) => {
            eprintln!("wren: parse error in '{name}': {e}");
            std::process::exit(1);
        }
    };

    output.message(&format!(
        "parsed header 'p cnf {} {}'",
        cnf.variables,
        cnf.clauses.len(),
    ));

    match config.conflict_limit {
        Some(limit) => output.verbose(&format!("solving with conflict limit {limit}")),
        None => output.verbose("solving without conflict limit"),
    }
    output.verbose(&format!("solving with the {engine} core"));

    let (report, witness, counters) = match engine.as_str() {
        "dpll" => {
            let mut solver = engines::dpll::Solver::from_cnf(&cnf, config);
            let report = solver.solve();
            (report, solver.witness(), solver.counters.clone())
        }

        "occurrence" => {
            let mut solver = engines::occurrence::Solver::from_cnf(&cnf, config);
            let report = solver.solve();
            (report, solver.witness(), solver.counters.clone())
        }

        _ => {
            let mut ctx = Context::from_cnf(&cnf, config);

            let progress = Rc::new(RefCell::new(Progress {
                output,
                start,
                variables: cnf.variables,
                rows: 0,
            }));

            {
                let progress = progress.clone();
                ctx.set_progress(Box::new(move |counters: &Counters, remaining: usize| {
                    progress.borrow_mut().row('d', counters, remaining);
                }));
            }

            progress
                .borrow_mut()
                .row('*', &ctx.counters, ctx.atom_db.remaining_count());

            let report = ctx.solve();

            let kind = match report {
                Report::Satisfiable => '1',
                Report::Unsatisfiable => '0',
                Report::Unknown => '?',
            };
            progress
                .borrow_mut()
                .row(kind, &ctx.counters, ctx.atom_db.remaining_count());

            (report, ctx.witness(), ctx.counters.clone())
        }
    };

    output.line();

    match report {
        Report::Satisfiable => {
            // The model is checked against the read formula, whichever core
            // produced it.
            if let Some(clause) = cnf.unsatisfied_clause(&witness) {
                let mut rendering = String::default();
                for literal in clause {
                    rendering.push_str(&format!("{literal} "));
                }
                eprintln!("wren: unsatisfied clause: {rendering}0");
                std::process::exit(1);
            }

            println!("s SATISFIABLE");
            if show_witness {
                print_witness(&witness);
            }
        }

        Report::Unsatisfiable => println!("s UNSATISFIABLE"),

        Report::Unknown => println!("s UNKNOWN"),
    }

    print_statistics(&output, &counters, start.elapsed().as_secs_f64());
    output.message(&format!("exit code {}", report.exit_code()));

    std::process::exit(report.exit_code());
}
