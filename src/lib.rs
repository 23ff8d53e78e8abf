//! # Boolgen
//!
//! Derives minimized sum-of-products expressions from truth tables using the
//! Quine-McCluskey method.
//!
//! ## Overview
//!
//! A truth table names its input columns and one or more output columns. For
//! every output, boolgen:
//!
//! 1. collects the rows where the output is 1 (row `i` is minterm `i`),
//! 2. merges them into prime implicants ([`prime_implicants`]),
//! 3. picks a covering subset, essential implicants first and greedy after
//!    that ([`select_cover`]),
//! 4. renders the cover as text such as `A & ~B | C` ([`render_cover`]).
//!
//! Columns that are all 0 or all 1 render as `"0"` / `"1"` directly.
//!
//! The greedy step approximates a minimum cover; the result is always correct
//! but not guaranteed to be the smallest possible expression.
//!
//! ## Quick Start
//!
//! ```
//! use boolgen::{evaluate_table, BoolgenConfig, TruthTable};
//!
//! # fn main() -> Result<(), boolgen::BoolgenError> {
//! let table = TruthTable::parse(
//!     "A B C D=
//!      0 0 0 0
//!      0 0 1 1
//!      0 1 0 1
//!      0 1 1 1
//!      1 0 0 0
//!      1 0 1 1
//!      1 1 0 1
//!      1 1 1 1",
//! )?;
//!
//! for output in evaluate_table(&table, &BoolgenConfig::default())? {
//!     println!("{}", output); // D = B | C
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Table Format
//!
//! The first non-blank line is a header of variable names. A name that ends
//! with `=`, starts with `=` or starts with `out` (any case) is an output; the
//! `=` markers are stripped. If no output is marked, the last column is the
//! output. Every following non-blank line is a row of `0`/`1` cells. Cells may
//! be separated by whitespace or punctuation such as `,` and `|`.
//!
//! ## Checking Results
//!
//! Rendered expressions can be parsed back with [`Expr::parse`] and evaluated,
//! which is what [`TruthTable::verify`] and [`BoolgenConfig::verify`] do.

pub mod cover;
pub mod error;
pub mod expression;
pub mod implicants;
pub mod minimize;
pub mod render;
pub mod table;
pub mod term;

// Re-export high-level public API
pub use cover::{select_cover, CoverageChart};
pub use error::{BoolgenError, VerificationError};
pub use expression::{Expr, ExpressionParseError, ParseErrorKind};
pub use implicants::prime_implicants;
pub use minimize::{
    evaluate_file, evaluate_reader, evaluate_str, evaluate_table, simplify_expression,
    OutputExpression,
};
pub use render::{render_cover, render_term};
pub use table::{Row, TableError, TableReadError, TruthTable, MAX_INPUTS};
pub use term::{ParseTermError, Symbol, Term};

/// Configuration for table evaluation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoolgenConfig {
    /// Evaluate output columns on separate threads
    pub parallel: bool,
    /// Check every expression against the table before returning it
    pub verify: bool,
}

impl BoolgenConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_config_defaults() {
        let config = BoolgenConfig::new();
        assert!(!config.parallel);
        assert!(!config.verify);
        assert_eq!(config, BoolgenConfig::default());
    }

    #[test]
    fn test_pipeline() {
        let minterms = [1, 2, 3];
        let primes = prime_implicants(2, &minterms);
        let cover = select_cover(&primes, &minterms, 2);
        let vars = [Arc::from("x"), Arc::from("y")];
        assert_eq!(render_cover(&vars, &cover), "x | y");
    }
}
