//! Error types used in the library.
//!
//! - Most of these follow from malformed input, e.g. a DIMACS file which cannot be parsed or a variable which cannot be reconciled.
//! - Some are internal --- e.g. BCP conflicts are used to control the flow of a solve and never escape a session.
//! - One is always fatal: a [Timeout](ErrorKind::Timeout) of the decision procedure ends any computation it occurs in.
//!
//! Contradictions are not errors.
//! An unsatisfiable combination or clause is recorded as data, and cancellation of a computation is noted on its (successful) result.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::time::Duration;

use crate::{session::ClauseKey, structures::atom::Atom};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    BCP(BCPError),
    Config(ConfigError),
    Parse(ParseError),
    VariableMap(VariableMapError),

    /// The decision procedure could not decide some query within the time allowed.
    Timeout(Duration),
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and leads to backtracking.
    Conflict(ClauseKey),

    /// A watched clause does not contain the literal it is watched by.
    /// Perhaps an issue during addition of the clause…?
    CorruptWatch(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The value given to the named option is outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A literal could not be read at a specific line.
    Literal(usize),

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when moving literals between variable maps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableMapError {
    /// The atom is not part of the variable map it was read from.
    UnknownAtom(Atom),

    /// The named variable is not part of the variable map it was moved to.
    Unmapped(String),

    /// The named variable appears twice in one variable map.
    DuplicateName(String),
}

impl From<VariableMapError> for ErrorKind {
    fn from(e: VariableMapError) -> Self {
        ErrorKind::VariableMap(e)
    }
}
