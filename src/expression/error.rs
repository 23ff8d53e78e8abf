//! Errors reported when an expression cannot be read back

use std::fmt;
use std::sync::Arc;

/// What the parser ran into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that starts no operator, constant or name
    UnknownCharacter,
    /// The text stopped in the middle of an expression
    UnexpectedEnd {
        /// Tokens that would have continued the expression
        expected: Vec<String>,
    },
    /// A token that cannot appear where it was found
    UnexpectedToken {
        /// Text of the offending token
        found: Arc<str>,
        /// Tokens that would have been accepted instead
        expected: Vec<String>,
    },
    /// A complete expression followed by more text
    TrailingToken {
        /// Text of the first extra token
        found: Arc<str>,
    },
}

/// An expression string that the grammar rejects
///
/// Rendered minimizer output always parses, so outside of hand-written input
/// this signals that rendering and the grammar disagree on some name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// The rejected text
    pub input: Arc<str>,
    /// Byte offset of the problem within `input`
    pub offset: usize,
}

fn write_expected(f: &mut fmt::Formatter<'_>, expected: &[String]) -> fmt::Result {
    if expected.is_empty() {
        return Ok(());
    }
    write!(f, " (expected one of {})", expected.join(", "))
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {:?} at byte {}: ", self.input, self.offset)?;
        match &self.kind {
            ParseErrorKind::UnknownCharacter => write!(f, "unknown character"),
            ParseErrorKind::UnexpectedEnd { expected } => {
                write!(f, "expression ends early")?;
                write_expected(f, expected)
            }
            ParseErrorKind::UnexpectedToken { found, expected } => {
                write!(f, "unexpected '{}'", found)?;
                write_expected(f, expected)
            }
            ParseErrorKind::TrailingToken { found } => {
                write!(f, "extra '{}' after a complete expression", found)
            }
        }
    }
}

impl std::error::Error for ExpressionParseError {}
