//! Sum-of-products expressions as produced by the minimizer
//!
//! The minimizer returns plain text such as `A & ~B | C`. This module parses
//! that text back into an [`Expr`] tree so it can be evaluated under an input
//! assignment, which is how a simplified expression is checked against the
//! truth table it came from.
//!
//! ```
//! use boolgen::Expr;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), boolgen::ExpressionParseError> {
//! let expr = Expr::parse("A & ~B | C")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("A"), true);
//! assignment.insert(Arc::from("B"), false);
//! assignment.insert(Arc::from("C"), false);
//! assert!(expr.evaluate(&assignment));
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod parser;

pub use error::{ExpressionParseError, ParseErrorKind};

use std::sync::Arc;

/// A Boolean expression tree
///
/// `And` and `Or` are n-ary; the parser flattens chains such as `a & b & c`
/// into a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant value (`0` or `1`)
    Constant(bool),
    /// A named variable
    Variable(Arc<str>),
    /// Logical NOT of an expression
    Not(Box<Expr>),
    /// Logical AND of two or more expressions
    And(Vec<Expr>),
    /// Logical OR of two or more expressions
    Or(Vec<Expr>),
}

impl Expr {
    /// Create a variable expression
    pub fn variable(name: &str) -> Self {
        Expr::Variable(Arc::from(name))
    }

    /// Combine operands with AND, returning a lone operand unchanged
    pub(crate) fn conjunction(first: Expr, rest: Vec<Expr>) -> Self {
        Self::chain(first, rest, Expr::And)
    }

    /// Combine operands with OR, returning a lone operand unchanged
    pub(crate) fn disjunction(first: Expr, rest: Vec<Expr>) -> Self {
        Self::chain(first, rest, Expr::Or)
    }

    fn chain(first: Expr, rest: Vec<Expr>, make: fn(Vec<Expr>) -> Expr) -> Self {
        if rest.is_empty() {
            return first;
        }
        let mut operands = Vec::with_capacity(rest.len() + 1);
        operands.push(first);
        operands.extend(rest);
        make(operands)
    }
}
