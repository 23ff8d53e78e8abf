//! Truth-table text format support
//!
//! A table is plain text: the first non-blank line names the variables, every
//! following non-blank line holds one row of `0`/`1` cells. Cells and names may
//! be separated by any run of characters other than letters, digits, `_` and `=`.
//!
//! ```text
//! A B C D=
//! 0 0 0 0
//! 0 0 1 1
//! ...
//! ```
//!
//! A variable is an output when its name starts with `out` (any case) or `=`,
//! or ends with `=`. Output names are stored without their `=` markers. When no
//! output is declared, the last column is taken as the only output.
//!
//! Row `i` is minterm `i`: tables are expected to enumerate every input
//! assignment in ascending binary order.

mod error;

pub use error::{TableError, TableReadError};

use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Largest number of inputs a table can be minimized over
pub const MAX_INPUTS: usize = usize::BITS as usize - 2;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    inputs: Box<[bool]>,
    outputs: Box<[bool]>,
}

impl Row {
    /// Create a row from its input assignment and output values
    pub fn new(inputs: &[bool], outputs: &[bool]) -> Self {
        Row {
            inputs: inputs.into(),
            outputs: outputs.into(),
        }
    }

    /// Input assignment, first variable first
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Output values in declaration order
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// The input assignment read as a binary number (first variable is the MSB)
    pub fn assignment_index(&self) -> usize {
        self.inputs
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
    }
}

/// A parsed truth table with named inputs and outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    input_vars: Vec<Arc<str>>,
    output_vars: Vec<Arc<str>>,
    rows: Vec<Row>,
}

/// Check whether a header token declares an output variable
///
/// # Examples
///
/// ```
/// use boolgen::table::is_output_var;
///
/// assert!(is_output_var("D="));
/// assert!(is_output_var("=D"));
/// assert!(is_output_var("OUT1"));
/// assert!(!is_output_var("A"));
/// assert!(!is_output_var("route"));
/// ```
pub fn is_output_var(token: &str) -> bool {
    let prefix_out = token
        .get(..3)
        .map_or(false, |p| p.eq_ignore_ascii_case("out"));
    prefix_out || token.starts_with('=') || token.ends_with('=')
}

/// Name of a header token with its `=` markers removed
pub fn variable_name(token: &str) -> Arc<str> {
    Arc::from(token.replace('=', "").as_str())
}

/// Characters allowed in a variable name
///
/// Matches the identifier rule of the expression grammar, so every rendered
/// expression can be read back by [`Expr::parse`](crate::Expr::parse).
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    !(is_name_char(c) || c == '=')
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|t| !t.is_empty())
}

fn parse_cell(token: &str, line: usize, column: usize) -> Result<bool, TableError> {
    match token.parse::<u64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        Ok(value) => Err(TableError::NonBinaryCell {
            line,
            column,
            value,
        }),
        Err(_) => Err(TableError::InvalidCell {
            line,
            column,
            value: Arc::from(token),
        }),
    }
}

impl TruthTable {
    /// Create a table from already-split parts
    ///
    /// Validates the variable names (non-empty, unique, only letters, digits and
    /// `_`, never `0` or `1`), the shape of every row, and that there is at
    /// least one row. The row count is checked against the inputs by
    /// [`TruthTable::check_row_count`].
    pub fn new(
        input_vars: Vec<Arc<str>>,
        output_vars: Vec<Arc<str>>,
        rows: Vec<Row>,
    ) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for name in input_vars.iter().chain(output_vars.iter()) {
            if name.is_empty() {
                return Err(TableError::EmptyVariableName {
                    token: Arc::clone(name),
                });
            }
            // `0` and `1` would render as constants
            if !name.chars().all(is_name_char) || matches!(name.as_ref(), "0" | "1") {
                return Err(TableError::InvalidVariableName {
                    name: Arc::clone(name),
                });
            }
            if !seen.insert(Arc::clone(name)) {
                return Err(TableError::DuplicateVariable {
                    name: Arc::clone(name),
                });
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.inputs.len() != input_vars.len() || row.outputs.len() != output_vars.len() {
                return Err(TableError::RowShapeMismatch {
                    row: row_index,
                    expected_inputs: input_vars.len(),
                    actual_inputs: row.inputs.len(),
                    expected_outputs: output_vars.len(),
                    actual_outputs: row.outputs.len(),
                });
            }
        }

        if rows.is_empty() {
            return Err(TableError::NoRows);
        }

        for (index, row) in rows.iter().enumerate() {
            if row.assignment_index() != index {
                warn!(
                    "row {} has input assignment {}; minterms follow row order",
                    index,
                    row.assignment_index()
                );
            }
        }

        info!(
            "truth table: {} inputs, {} outputs, {} rows",
            input_vars.len(),
            output_vars.len(),
            rows.len()
        );

        Ok(TruthTable {
            input_vars,
            output_vars,
            rows,
        })
    }

    /// Parse a truth table from text
    ///
    /// # Examples
    ///
    /// ```
    /// use boolgen::TruthTable;
    ///
    /// # fn main() -> Result<(), boolgen::TableError> {
    /// let table = TruthTable::parse("A B\n0 0\n0 1\n1 0\n1 1")?;
    /// // No output declared: the last column becomes the output
    /// assert_eq!(table.input_vars()[0].as_ref(), "A");
    /// assert_eq!(table.output_vars()[0].as_ref(), "B");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(TableError::MissingHeader)?;

        // Keep the column order while splitting inputs from outputs
        let mut input_vars = Vec::new();
        let mut output_vars = Vec::new();
        let mut is_output = Vec::new();
        for token in tokens(header) {
            let output = is_output_var(token);
            let name = variable_name(token);
            if name.is_empty() {
                return Err(TableError::EmptyVariableName {
                    token: Arc::from(token),
                });
            }
            if output {
                output_vars.push(name);
            } else {
                input_vars.push(name);
            }
            is_output.push(output);
        }

        if output_vars.is_empty() {
            if let Some(last) = input_vars.pop() {
                output_vars.push(last);
                if let Some(flag) = is_output.last_mut() {
                    *flag = true;
                }
            }
        }

        let width = is_output.len();
        let mut rows = Vec::new();
        for (line_number, line) in lines {
            let cells = tokens(line)
                .enumerate()
                .map(|(column, token)| parse_cell(token, line_number, column))
                .collect::<Result<Vec<bool>, _>>()?;
            if cells.len() != width {
                return Err(TableError::RowWidthMismatch {
                    line: line_number,
                    expected: width,
                    actual: cells.len(),
                });
            }

            let mut inputs = Vec::with_capacity(input_vars.len());
            let mut outputs = Vec::with_capacity(output_vars.len());
            for (&cell, &output) in cells.iter().zip(is_output.iter()) {
                if output {
                    outputs.push(cell);
                } else {
                    inputs.push(cell);
                }
            }
            rows.push(Row::new(&inputs, &outputs));
        }

        TruthTable::new(input_vars, output_vars, rows)
    }

    /// Read a truth table from any buffered reader
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, TableReadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(TruthTable::parse(&text)?)
    }

    /// Read a truth table from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableReadError> {
        let file = File::open(path)?;
        TruthTable::from_reader(BufReader::new(file))
    }

    /// Check that every row can be numbered as a minterm of the inputs
    ///
    /// A table with more than `2^inputs` rows parses fine but cannot be
    /// minimized, since its later rows have no matching input assignment.
    /// Minterm indices are machine words, which also bounds the number of
    /// inputs to [`MAX_INPUTS`].
    pub fn check_row_count(&self) -> Result<(), TableError> {
        let inputs = self.input_vars.len();
        if inputs > MAX_INPUTS {
            return Err(TableError::TooManyInputs {
                inputs,
                max: MAX_INPUTS,
            });
        }
        let max = 1usize << inputs;
        if self.rows.len() > max {
            return Err(TableError::TooManyRows {
                rows: self.rows.len(),
                max,
            });
        }
        Ok(())
    }

    /// Input variable names in column order
    pub fn input_vars(&self) -> &[Arc<str>] {
        &self.input_vars
    }

    /// Output variable names in column order
    pub fn output_vars(&self) -> &[Arc<str>] {
        &self.output_vars
    }

    /// All rows in table order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of input variables
    pub fn num_inputs(&self) -> usize {
        self.input_vars.len()
    }

    /// Number of output variables
    pub fn num_outputs(&self) -> usize {
        self.output_vars.len()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Values of one output column, in row order
    ///
    /// # Panics
    ///
    /// Panics if `output_index` is not a valid output index.
    pub fn column(&self, output_index: usize) -> Vec<bool> {
        self.rows.iter().map(|row| row.outputs[output_index]).collect()
    }

    /// Row indices where an output column is 1
    pub fn minterms(&self, output_index: usize) -> Vec<usize> {
        self.column(output_index)
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| value.then_some(i))
            .collect()
    }
}

impl FromStr for TruthTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruthTable::parse(s)
    }
}

#[cfg(test)]
mod tests;
