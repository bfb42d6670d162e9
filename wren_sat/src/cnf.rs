/*!
Reading formulas in DIMACS form, and checking models against them.

# Grammar

- Zero or more comment lines, each starting with `c`.
- A header line `p cnf <variables> <clauses>`.
- `<clauses>` clauses, each a whitespace-separated sequence of non-zero
  literals terminated by `0`, freely spread over lines.

The reader produces a [Cnf] --- the variable count and the clause list --- and
nothing else. Feeding the clauses to a solver core is the caller's concern,
which keeps the parsed formula available for
[model checking](Cnf::unsatisfied_clause) after a solve.

Malformed input is reported through [ParseError] --- lifted, together with
file system failures, into [ErrorKind] when reading from a path --- and never
reaches a core.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    structures::literal::{Atom, Literal},
    types::err::{ErrorKind, ParseError},
};

/// A formula in conjunctive normal form: a variable count and a sequence of
/// integer clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    /// The count of variables; atoms of the formula are 1..=`variables`.
    pub variables: Atom,

    /// The clauses of the formula.
    pub clauses: Vec<Vec<Literal>>,
}

impl Cnf {
    /// Reads a DIMACS formula.
    ///
    /// ```rust
    /// # use wren_sat::cnf::Cnf;
    /// let dimacs = "c an example
    /// p cnf 2 2
    /// 1 2 0
    /// -1 -2 0
    /// ";
    ///
    /// let cnf = Cnf::read(dimacs.as_bytes()).unwrap();
    /// assert_eq!(cnf.variables, 2);
    /// assert_eq!(cnf.clauses.len(), 2);
    /// ```
    pub fn read(mut reader: impl BufRead) -> Result<Cnf, ParseError> {
        let mut buffer = String::default();
        let mut lines = 0;

        // First phase: comments, then the header.
        let (variables, clause_count) = loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ParseError::MissingHeader),
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines)),
            }

            match buffer.chars().next() {
                Some('c') => {
                    if !buffer.ends_with('\n') {
                        return Err(ParseError::EndOfFileInComment);
                    }
                }

                Some('p') => break Self::read_header(&buffer)?,

                _ => return Err(ParseError::MissingHeader),
            }
        };

        // Second phase: the clauses.
        let mut cnf = Cnf {
            variables,
            clauses: Vec::with_capacity(clause_count),
        };
        let mut clause: Vec<Literal> = Vec::default();

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines)),
            }

            // Some distributed formulas carry comments or a '%' marker after
            // the header; these are passed over rather than rejected.
            match buffer.chars().next() {
                Some('c') => continue,
                Some('%') => break,
                _ => {}
            }

            for token in buffer.split_whitespace() {
                if token == "0" {
                    if cnf.clauses.len() == clause_count {
                        return Err(ParseError::TooManyClauses);
                    }
                    cnf.clauses.push(std::mem::take(&mut clause));
                    continue;
                }

                let int: i64 = match token.parse() {
                    Ok(int) => int,
                    Err(_) => return Err(ParseError::InvalidLiteral(token.to_string())),
                };

                if int == 0 || int.unsigned_abs() > variables as u64 {
                    return Err(ParseError::InvalidLiteral(token.to_string()));
                }

                clause.push(Literal::new(int as i32));
            }
        }

        if !clause.is_empty() {
            return Err(ParseError::MissingZero);
        }

        if cnf.clauses.len() != clause_count {
            return Err(ParseError::MissingClauses);
        }

        Ok(cnf)
    }

    /// Reads a DIMACS formula from a file.
    ///
    /// ```rust,ignore
    /// let cnf = Cnf::from_path(&path)?;
    /// ```
    pub fn from_path(path: &Path) -> Result<Cnf, ErrorKind> {
        let file = File::open(path)?;
        Ok(Cnf::read(BufReader::new(file))?)
    }

    fn read_header(line: &str) -> Result<(Atom, usize), ParseError> {
        let mut tokens = line.split_whitespace();

        if tokens.next() != Some("p") || tokens.next() != Some("cnf") {
            return Err(ParseError::InvalidHeader);
        }

        let variables: i32 = match tokens.next().map(str::parse) {
            Some(Ok(count)) if count >= 0 => count,
            _ => return Err(ParseError::InvalidHeader),
        };

        let clauses: i32 = match tokens.next().map(str::parse) {
            Some(Ok(count)) if count >= 0 => count,
            _ => return Err(ParseError::InvalidHeader),
        };

        if tokens.next().is_some() {
            return Err(ParseError::InvalidHeader);
        }

        Ok((variables as Atom, clauses as usize))
    }

    /// A clause of the formula not satisfied by the witness, if one exists.
    ///
    /// The witness assigns each atom the polarity of its entry, as produced
    /// by a solver core; a clause is satisfied when it contains some literal
    /// of the witness.
    pub fn unsatisfied_clause(&self, witness: &[Literal]) -> Option<&[Literal]> {
        self.clauses
            .iter()
            .find(|clause| {
                !clause
                    .iter()
                    .any(|literal| witness.get(literal.atom() as usize - 1) == Some(literal))
            })
            .map(|clause| clause.as_slice())
    }
}

#[cfg(test)]
mod dimacs_reader_tests {
    use super::*;

    #[test]
    fn trivial_formula() {
        let cnf = Cnf::read("p cnf 0 0\n".as_bytes()).unwrap();

        assert_eq!(cnf.variables, 0);
        assert!(cnf.clauses.is_empty());
    }

    #[test]
    fn comments_then_header() {
        let dimacs = "c one\nc two\np cnf 3 1\n1 -2 3 0\n";
        let cnf = Cnf::read(dimacs.as_bytes()).unwrap();

        assert_eq!(cnf.variables, 3);
        assert_eq!(
            cnf.clauses,
            vec![vec![Literal::new(1), Literal::new(-2), Literal::new(3)]]
        );
    }

    #[test]
    fn clause_spread_over_lines() {
        let dimacs = "p cnf 2 2\n1\n2 0 -1\n-2 0\n";
        let cnf = Cnf::read(dimacs.as_bytes()).unwrap();

        assert_eq!(cnf.clauses.len(), 2);
    }

    #[test]
    fn end_of_file_in_comment() {
        assert_eq!(
            Cnf::read("c no newline".as_bytes()),
            Err(ParseError::EndOfFileInComment)
        );
    }

    #[test]
    fn missing_header() {
        assert_eq!(
            Cnf::read("1 2 0\n".as_bytes()),
            Err(ParseError::MissingHeader)
        );
        assert_eq!(Cnf::read("".as_bytes()), Err(ParseError::MissingHeader));
    }

    #[test]
    fn invalid_header() {
        assert_eq!(
            Cnf::read("p cnf\n".as_bytes()),
            Err(ParseError::InvalidHeader)
        );
        assert_eq!(
            Cnf::read("p cnf -1 2\n".as_bytes()),
            Err(ParseError::InvalidHeader)
        );
    }

    #[test]
    fn literal_out_of_range() {
        assert_eq!(
            Cnf::read("p cnf 2 1\n1 3 0\n".as_bytes()),
            Err(ParseError::InvalidLiteral("3".to_string()))
        );
        assert_eq!(
            Cnf::read("p cnf 2 1\n1 -2147483648 0\n".as_bytes()),
            Err(ParseError::InvalidLiteral("-2147483648".to_string()))
        );
    }

    #[test]
    fn clause_count_mismatches() {
        assert_eq!(
            Cnf::read("p cnf 1 1\n1 0\n-1 0\n".as_bytes()),
            Err(ParseError::TooManyClauses)
        );
        assert_eq!(
            Cnf::read("p cnf 1 2\n1 0\n".as_bytes()),
            Err(ParseError::MissingClauses)
        );
    }

    #[test]
    fn missing_terminating_zero() {
        assert_eq!(
            Cnf::read("p cnf 2 1\n1 2\n".as_bytes()),
            Err(ParseError::MissingZero)
        );
    }

    #[test]
    fn missing_file() {
        let missing = Path::new("no_such_formula.cnf");

        assert_eq!(
            Cnf::from_path(missing),
            Err(ErrorKind::Io(std::io::ErrorKind::NotFound))
        );
    }

    #[test]
    fn witness_checking() {
        let cnf = Cnf::read("p cnf 2 2\n1 2 0\n-1 -2 0\n".as_bytes()).unwrap();

        let good = [Literal::new(1), Literal::new(-2)];
        assert!(cnf.unsatisfied_clause(&good).is_none());

        let bad = [Literal::new(1), Literal::new(2)];
        assert_eq!(
            cnf.unsatisfied_clause(&bad),
            Some([Literal::new(-1), Literal::new(-2)].as_slice())
        );
    }
}
