/*!
Error types used in the library.

The solving hot path never constructs an error: propagation signals a
conflict by returning a clause key, and the search loop observes top-level
inconsistency through a conflict at decision level zero. So the errors here
belong to the edges of the library --- at present, reading a formula.

Specific enums feed the general [ErrorKind] union through `From` impls, so
`?` lifts them wherever a caller handles several kinds at once.
*/

use std::io;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while reading a DIMACS formula.
    Parse(ParseError),

    /// An error from the underlying reader or file system.
    Io(io::ErrorKind),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<io::Error> for ErrorKind {
    fn from(e: io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Io(kind) => write!(f, "{kind}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors while reading a DIMACS formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended inside a comment line.
    EndOfFileInComment,

    /// The input holds no `p cnf` header where one was required.
    MissingHeader,

    /// A `p cnf` header was found, but could not be read.
    InvalidHeader,

    /// A token where a literal was expected, but which is not a literal of
    /// the formula: not an integer, zero magnitude out of a clause, or a
    /// magnitude above the declared variable count.
    InvalidLiteral(String),

    /// More clauses than the header declared.
    TooManyClauses,

    /// Fewer clauses than the header declared.
    MissingClauses,

    /// The input ended inside a clause, before its terminating zero.
    MissingZero,

    /// The reader failed at the given line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfFileInComment => write!(f, "end-of-file in comment"),
            Self::MissingHeader => write!(f, "expected 'c' or 'p'"),
            Self::InvalidHeader => write!(f, "invalid header"),
            Self::InvalidLiteral(token) => write!(f, "invalid literal '{token}'"),
            Self::TooManyClauses => write!(f, "too many clauses"),
            Self::MissingClauses => write!(f, "clause missing"),
            Self::MissingZero => write!(f, "terminating zero missing"),
            Self::Line(line) => write!(f, "failed to read line {line}"),
        }
    }
}

impl std::error::Error for ParseError {}
