//! Per-column minimization and table-level evaluation
//!
//! [`simplify_expression`] turns one output column into a sum-of-products
//! string: constant columns short-circuit to `"0"` / `"1"`, everything else
//! goes through [`prime_implicants`] and [`select_cover`] before rendering.
//! [`evaluate_table`] runs that for every output column of a [`TruthTable`].

use crate::cover::select_cover;
use crate::error::{BoolgenError, VerificationError};
use crate::expression::Expr;
use crate::implicants::prime_implicants;
use crate::render::render_cover;
use crate::table::{Row, TruthTable};
use crate::BoolgenConfig;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// The simplified expression for one output variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputExpression {
    /// Output variable name
    pub name: Arc<str>,
    /// Rendered sum-of-products expression
    pub expression: String,
}

impl OutputExpression {
    /// Create a named output expression
    pub fn new(name: Arc<str>, expression: String) -> Self {
        OutputExpression { name, expression }
    }
}

impl fmt::Display for OutputExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.expression)
    }
}

/// Simplify one output column of a truth table
///
/// Row `i` is treated as minterm `i`. A column that is all 1 returns `"1"`
/// and a column that is all 0 returns `"0"` without running the minimizer.
///
/// # Panics
///
/// Panics if a row is too short for `output_index`, if there are more rows
/// than `2^input_vars.len()` or if a non-constant column has no inputs.
///
/// # Examples
///
/// ```
/// use boolgen::{simplify_expression, TruthTable};
///
/// let table = TruthTable::parse("A B C D=
///     0 0 0 0
///     0 0 1 1
///     0 1 0 1
///     0 1 1 1
///     1 0 0 0
///     1 0 1 1
///     1 1 0 1
///     1 1 1 1").unwrap();
///
/// let expr = simplify_expression(table.input_vars(), table.rows(), 0);
/// assert_eq!(expr, "B | C");
/// ```
pub fn simplify_expression(input_vars: &[Arc<str>], rows: &[Row], output_index: usize) -> String {
    let column: Vec<bool> = rows.iter().map(|row| row.outputs()[output_index]).collect();

    if column.iter().all(|&v| v) {
        return "1".to_string();
    }
    if column.iter().all(|&v| !v) {
        return "0".to_string();
    }

    let minterms: Vec<usize> = column
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| v.then_some(i))
        .collect();

    let num_vars = input_vars.len();
    let primes = prime_implicants(num_vars, &minterms);
    let cover = select_cover(&primes, &minterms, num_vars);
    debug!(
        "Output {}: {} minterms, {} prime implicants, {} selected",
        output_index,
        minterms.len(),
        primes.len(),
        cover.len()
    );

    render_cover(input_vars, &cover)
}

impl TruthTable {
    /// Simplify one output column of this table
    ///
    /// # Panics
    ///
    /// Panics if `output_index` is out of range, or under the conditions
    /// listed on [`simplify_expression`].
    pub fn simplify(&self, output_index: usize) -> String {
        simplify_expression(self.input_vars(), self.rows(), output_index)
    }

    /// Check an expression against every row of one output column
    ///
    /// The expression is parsed, then evaluated under each row's input
    /// assignment; the first row whose result differs from the recorded
    /// output is reported.
    pub fn verify(&self, output_index: usize, expression: &str) -> Result<(), BoolgenError> {
        let output = &self.output_vars()[output_index];
        let expr = Expr::parse(expression).map_err(|error| BoolgenError::Expression {
            output: Arc::clone(output),
            error,
        })?;

        let mut assignment: HashMap<Arc<str>, bool> = HashMap::with_capacity(self.num_inputs());
        for (row_index, row) in self.rows().iter().enumerate() {
            for (name, &value) in self.input_vars().iter().zip(row.inputs()) {
                assignment.insert(Arc::clone(name), value);
            }
            let expected = row.outputs()[output_index];
            if expr.evaluate(&assignment) != expected {
                return Err(VerificationError {
                    output: Arc::clone(output),
                    expression: Arc::from(expression),
                    row: row_index,
                    expected,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Simplify every output column of a table, in output-column order
///
/// With `config.parallel` each column runs on its own scoped thread; the
/// result is identical to the sequential run. With `config.verify` every
/// expression is checked against the table before it is returned.
///
/// # Errors
///
/// Returns [`BoolgenError::Table`] if the table has more rows than its inputs
/// can number, and [`BoolgenError::Verification`] if a checked expression
/// disagrees with the table.
pub fn evaluate_table(
    table: &TruthTable,
    config: &BoolgenConfig,
) -> Result<Vec<OutputExpression>, BoolgenError> {
    table.check_row_count()?;

    let expressions: Vec<String> = if config.parallel && table.num_outputs() > 1 {
        debug!("Evaluating {} outputs in parallel", table.num_outputs());
        thread::scope(|s| {
            let handles: Vec<_> = (0..table.num_outputs())
                .map(|index| s.spawn(move || table.simplify(index)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(expression) => expression,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        })
    } else {
        (0..table.num_outputs())
            .map(|index| table.simplify(index))
            .collect()
    };

    if config.verify {
        for (index, expression) in expressions.iter().enumerate() {
            table.verify(index, expression)?;
        }
        debug!("Verified {} expressions", expressions.len());
    }

    Ok(table
        .output_vars()
        .iter()
        .zip(expressions)
        .map(|(name, expression)| OutputExpression::new(Arc::clone(name), expression))
        .collect())
}

/// Parse a truth table from text and simplify all of its outputs
///
/// Uses the default [`BoolgenConfig`].
///
/// # Examples
///
/// ```
/// let outputs = boolgen::evaluate_str("A B Y=\n0 0 0\n0 1 1\n1 0 1\n1 1 1").unwrap();
/// assert_eq!(outputs[0].to_string(), "Y = A | B");
/// ```
pub fn evaluate_str(text: &str) -> Result<Vec<OutputExpression>, BoolgenError> {
    let table = TruthTable::parse(text)?;
    evaluate_table(&table, &BoolgenConfig::default())
}

/// Read a truth table from any buffered reader and simplify all of its outputs
pub fn evaluate_reader<R: BufRead>(reader: R) -> Result<Vec<OutputExpression>, BoolgenError> {
    let table = TruthTable::from_reader(reader)?;
    evaluate_table(&table, &BoolgenConfig::default())
}

/// Read a truth table from a file and simplify all of its outputs
pub fn evaluate_file<P: AsRef<Path>>(path: P) -> Result<Vec<OutputExpression>, BoolgenError> {
    let table = TruthTable::from_file(path)?;
    evaluate_table(&table, &BoolgenConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ParseErrorKind;
    use crate::table::TableError;
    use test_log::test;

    const XOR3_TABLE: &str = "A B C D= E=
                              0 0 0 0 1
                              0 0 1 1 0
                              0 1 0 1 0
                              0 1 1 0 1
                              1 0 0 1 0
                              1 0 1 0 1
                              1 1 0 0 1
                              1 1 1 1 0";

    fn table_with_column(values: [u8; 8]) -> TruthTable {
        let mut text = String::from("A B C D=\n");
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("{} {} {} {}\n", (i >> 2) & 1, (i >> 1) & 1, i & 1, v));
        }
        TruthTable::parse(&text).unwrap()
    }

    #[test]
    fn test_single_output() {
        let table = table_with_column([0, 1, 1, 0, 1, 0, 0, 1]);
        assert_eq!(
            table.simplify(0),
            "A & B & C | A & ~B & ~C | B & ~A & ~C | C & ~A & ~B"
        );
    }

    #[test]
    fn test_multiple_outputs() {
        let table = TruthTable::parse(XOR3_TABLE).unwrap();
        assert_eq!(
            table.simplify(0),
            "A & B & C | A & ~B & ~C | B & ~A & ~C | C & ~A & ~B"
        );
        assert_eq!(
            table.simplify(1),
            "A & B & ~C | A & C & ~B | B & C & ~A | ~A & ~B & ~C"
        );
    }

    #[test]
    fn test_all_zeros() {
        let table = table_with_column([0; 8]);
        assert_eq!(table.simplify(0), "0");
    }

    #[test]
    fn test_all_ones() {
        let table = table_with_column([1; 8]);
        assert_eq!(table.simplify(0), "1");
    }

    #[test]
    fn test_some_simplification() {
        let table = table_with_column([0, 1, 1, 1, 0, 1, 1, 1]);
        assert_eq!(table.simplify(0), "B | C");
    }

    #[test]
    fn test_single_literal() {
        let table = table_with_column([1, 1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(table.simplify(0), "~A");
    }

    #[test]
    fn test_constant_shortcut_without_inputs() {
        // The minimizer would reject zero inputs; the shortcut must answer first
        let rows = vec![Row::new(&[], &[true])];
        assert_eq!(simplify_expression(&[], &rows, 0), "1");
        let rows = vec![Row::new(&[], &[false])];
        assert_eq!(simplify_expression(&[], &rows, 0), "0");
    }

    #[test]
    fn test_output_expression_display() {
        let out = OutputExpression::new(Arc::from("D"), "B | C".to_string());
        assert_eq!(out.to_string(), "D = B | C");
    }

    #[test]
    fn test_evaluate_table_order_and_names() {
        let table = TruthTable::parse(XOR3_TABLE).unwrap();
        let outputs = evaluate_table(&table, &BoolgenConfig::default()).unwrap();
        let names: Vec<&str> = outputs.iter().map(|o| o.name.as_ref()).collect();
        assert_eq!(names, vec!["D", "E"]);
        assert_eq!(outputs[0].expression, table.simplify(0));
        assert_eq!(outputs[1].expression, table.simplify(1));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = TruthTable::parse(XOR3_TABLE).unwrap();
        let sequential = evaluate_table(&table, &BoolgenConfig::default()).unwrap();
        let config = BoolgenConfig {
            parallel: true,
            ..BoolgenConfig::default()
        };
        let parallel = evaluate_table(&table, &config).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_evaluate_table_with_verify() {
        let table = TruthTable::parse(XOR3_TABLE).unwrap();
        let config = BoolgenConfig {
            parallel: true,
            verify: true,
        };
        assert_eq!(evaluate_table(&table, &config).unwrap().len(), 2);
    }

    #[test]
    fn test_evaluate_table_rejects_extra_rows() {
        let table = TruthTable::parse("A B=\n0 0\n1 1\n0 1").unwrap();
        let err = evaluate_table(&table, &BoolgenConfig::default()).unwrap_err();
        assert!(matches!(err, BoolgenError::Table(_)));
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let table = table_with_column([0, 1, 1, 1, 0, 1, 1, 1]);
        assert!(table.verify(0, "B | C").is_ok());

        match table.verify(0, "B") {
            Err(BoolgenError::Verification(err)) => {
                assert_eq!(err.output.as_ref(), "D");
                assert_eq!(err.row, 1);
                assert!(err.expected);
            }
            other => panic!("expected verification error, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_rejects_unparsable_expression() {
        let table = table_with_column([0, 1, 1, 1, 0, 1, 1, 1]);
        match table.verify(0, "B |") {
            Err(BoolgenError::Expression { output, error }) => {
                assert_eq!(output.as_ref(), "D");
                assert!(matches!(error.kind, ParseErrorKind::UnexpectedEnd { .. }));
            }
            other => panic!("expected expression error, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_accepts_unicode_names() {
        let table = TruthTable::parse("α β Y=\n0 0 0\n0 1 1\n1 0 1\n1 1 1").unwrap();
        let config = BoolgenConfig {
            verify: true,
            ..BoolgenConfig::default()
        };
        let outputs = evaluate_table(&table, &config).unwrap();
        assert_eq!(outputs[0].to_string(), "Y = α | β");
    }

    #[test]
    fn test_verify_accepts_digit_names() {
        let table = TruthTable::parse("x1 2 Y=\n0 0 0\n0 1 0\n1 0 0\n1 1 1").unwrap();
        let config = BoolgenConfig {
            verify: true,
            ..BoolgenConfig::default()
        };
        let outputs = evaluate_table(&table, &config).unwrap();
        assert_eq!(outputs[0].expression, "2 & x1");
    }

    #[test]
    fn test_evaluate_table_rejects_too_many_inputs() {
        let inputs = crate::table::MAX_INPUTS + 1;
        let names: Vec<Arc<str>> = (0..inputs).map(|i| Arc::from(format!("x{}", i))).collect();
        let table = TruthTable::new(
            names,
            vec![Arc::from("Y")],
            vec![Row::new(&vec![false; inputs], &[true])],
        )
        .unwrap();
        assert!(matches!(
            evaluate_table(&table, &BoolgenConfig::default()),
            Err(BoolgenError::Table(TableError::TooManyInputs { .. }))
        ));
    }

    #[test]
    fn test_evaluate_str() {
        let outputs = evaluate_str("A B Y=\n0 0 0\n0 1 1\n1 0 1\n1 1 1").unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].to_string(), "Y = A | B");
    }

    #[test]
    fn test_evaluate_str_reports_table_errors() {
        assert!(matches!(
            evaluate_str("A B=\n0 x"),
            Err(BoolgenError::Table(_))
        ));
    }

    #[test]
    fn test_evaluate_reader() {
        let outputs = evaluate_reader(XOR3_TABLE.as_bytes()).unwrap();
        assert_eq!(outputs.len(), 2);
    }
}
