//! Parsing support for rendered expressions

use super::error::{ExpressionParseError, ParseErrorKind};
use super::Expr;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl Expr {
    /// Parse an expression from a string
    ///
    /// Accepts the operators produced by the minimizer and their common
    /// alternatives:
    /// - `|` or `+` for OR
    /// - `&` or `*` for AND
    /// - `~` or `!` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| {
                let (kind, offset) = match e {
                    ParseError::InvalidToken { location } => {
                        (ParseErrorKind::UnknownCharacter, location)
                    }
                    ParseError::UnrecognizedEof { location, expected } => {
                        (ParseErrorKind::UnexpectedEnd { expected }, location)
                    }
                    ParseError::UnrecognizedToken {
                        token: (start, token, _),
                        expected,
                    } => (
                        ParseErrorKind::UnexpectedToken {
                            found: Arc::from(token.1),
                            expected,
                        },
                        start,
                    ),
                    ParseError::ExtraToken {
                        token: (start, token, _),
                    } => (
                        ParseErrorKind::TrailingToken {
                            found: Arc::from(token.1),
                        },
                        start,
                    ),
                    // The grammar has no fallible actions
                    ParseError::User { error } => match error {},
                };
                ExpressionParseError {
                    kind,
                    input: Arc::from(input),
                    offset,
                }
            })
    }
}

impl std::str::FromStr for Expr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}
