//! Error types for the boolgen minimizer
//!
//! Each failure source has its own error type so callers can match on it
//! programmatically; [`BoolgenError`] wraps them for the top-level entry points.

use crate::expression::ExpressionParseError;
use crate::table::{TableError, TableReadError};
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the boolgen entry points
#[derive(Debug)]
pub enum BoolgenError {
    /// The truth table text was malformed
    Table(TableError),

    /// The expression produced for an output could not be parsed back
    ///
    /// This points at a name that rendering and the expression grammar read
    /// differently, not at bad user input.
    Expression {
        /// The output variable whose expression failed to parse
        output: Arc<str>,
        /// The parser's report
        error: ExpressionParseError,
    },

    /// A produced expression disagrees with the truth table
    Verification(VerificationError),

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while reading table files or streams.
    Io(io::Error),
}

/// A simplified expression evaluated differently from its truth table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    /// The output variable whose expression failed
    pub output: Arc<str>,
    /// The rendered expression
    pub expression: Arc<str>,
    /// Index of the first disagreeing row
    pub row: usize,
    /// The value recorded in the table for that row
    pub expected: bool,
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expression for {} ({}) evaluates to {} on row {}, table records {}",
            self.output,
            self.expression,
            u8::from(!self.expected),
            self.row,
            u8::from(self.expected)
        )
    }
}

impl std::error::Error for VerificationError {}

impl fmt::Display for BoolgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolgenError::Table(err) => write!(f, "Invalid truth table: {}", err),
            BoolgenError::Expression { output, error } => {
                write!(f, "Expression for {} does not read back: {}", output, error)
            }
            BoolgenError::Verification(err) => write!(f, "Verification failed: {}", err),
            BoolgenError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BoolgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoolgenError::Table(err) => Some(err),
            BoolgenError::Expression { error, .. } => Some(error),
            BoolgenError::Verification(err) => Some(err),
            BoolgenError::Io(err) => Some(err),
        }
    }
}

impl From<TableError> for BoolgenError {
    fn from(err: TableError) -> Self {
        BoolgenError::Table(err)
    }
}

impl From<TableReadError> for BoolgenError {
    fn from(err: TableReadError) -> Self {
        match err {
            TableReadError::Table(err) => BoolgenError::Table(err),
            TableReadError::Io(err) => BoolgenError::Io(err),
        }
    }
}

impl From<VerificationError> for BoolgenError {
    fn from(err: VerificationError) -> Self {
        BoolgenError::Verification(err)
    }
}

impl From<io::Error> for BoolgenError {
    fn from(err: io::Error) -> Self {
        BoolgenError::Io(err)
    }
}

// Lets callers returning io::Result use `?` on boolgen results
impl From<BoolgenError> for io::Error {
    fn from(err: BoolgenError) -> Self {
        match err {
            BoolgenError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
