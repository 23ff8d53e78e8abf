//! Error types for truth-table parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to truth-table format and shape
///
/// Line numbers are 1-based and refer to the original text, blank lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The input contains no header line
    MissingHeader,
    /// A header token is empty once its `=` markers are removed
    EmptyVariableName {
        /// The offending header token
        token: Arc<str>,
    },
    /// A variable name contains characters other than letters, digits and `_`,
    /// or is one of the constants `0` and `1`
    InvalidVariableName {
        /// The rejected name
        name: Arc<str>,
    },
    /// The same variable name is declared twice
    DuplicateVariable {
        /// The duplicated name
        name: Arc<str>,
    },
    /// A cell is not an integer
    InvalidCell {
        /// Line of the cell
        line: usize,
        /// 0-based column of the cell
        column: usize,
        /// The cell text
        value: Arc<str>,
    },
    /// A cell is an integer other than 0 or 1
    NonBinaryCell {
        /// Line of the cell
        line: usize,
        /// 0-based column of the cell
        column: usize,
        /// The cell value
        value: u64,
    },
    /// A row does not have one cell per declared variable
    RowWidthMismatch {
        /// Line of the row
        line: usize,
        /// Number of declared variables
        expected: usize,
        /// Number of cells found
        actual: usize,
    },
    /// A row's dimensions don't match the declared variables
    RowShapeMismatch {
        /// 0-based row index
        row: usize,
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the row
        actual_inputs: usize,
        /// Expected number of outputs
        expected_outputs: usize,
        /// Actual number of outputs in the row
        actual_outputs: usize,
    },
    /// The table has a header but no rows
    NoRows,
    /// The table has more rows than there are input assignments
    TooManyRows {
        /// Number of rows in the table
        rows: usize,
        /// Number of distinct input assignments
        max: usize,
    },
    /// The table has more inputs than a minterm index can address
    TooManyInputs {
        /// Number of input variables
        inputs: usize,
        /// Largest supported number of inputs
        max: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingHeader => write!(f, "Truth table is missing its header line"),
            TableError::EmptyVariableName { token } => {
                write!(f, "Header token '{}' does not name a variable", token)
            }
            TableError::InvalidVariableName { name } => write!(
                f,
                "Variable name '{}' must use only letters, digits and '_' and cannot be 0 or 1",
                name
            ),
            TableError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is declared more than once", name)
            }
            TableError::InvalidCell {
                line,
                column,
                value,
            } => write!(
                f,
                "Line {}: cell {} ('{}') is not an integer",
                line, column, value
            ),
            TableError::NonBinaryCell {
                line,
                column,
                value,
            } => write!(
                f,
                "Line {}: cell {} has value {}, expected 0 or 1",
                line, column, value
            ),
            TableError::RowWidthMismatch {
                line,
                expected,
                actual,
            } => write!(
                f,
                "Line {}: row has {} cells but the header declares {} variables",
                line, actual, expected
            ),
            TableError::RowShapeMismatch {
                row,
                expected_inputs,
                actual_inputs,
                expected_outputs,
                actual_outputs,
            } => write!(
                f,
                "Row {} dimensions (inputs: {}, outputs: {}) don't match declared dimensions (inputs: {}, outputs: {})",
                row, actual_inputs, actual_outputs, expected_inputs, expected_outputs
            ),
            TableError::NoRows => write!(f, "Truth table has no rows"),
            TableError::TooManyRows { rows, max } => write!(
                f,
                "Truth table has {} rows but its inputs only allow {}",
                rows, max
            ),
            TableError::TooManyInputs { inputs, max } => write!(
                f,
                "Truth table has {} inputs, at most {} are supported",
                inputs, max
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a truth table from a reader or file
#[derive(Debug)]
pub enum TableReadError {
    /// Table format error
    Table(TableError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for TableReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableReadError::Table(e) => write!(f, "Truth table error: {}", e),
            TableReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TableReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableReadError::Table(e) => Some(e),
            TableReadError::Io(e) => Some(e),
        }
    }
}

impl From<TableError> for TableReadError {
    fn from(err: TableError) -> Self {
        TableReadError::Table(err)
    }
}

impl From<io::Error> for TableReadError {
    fn from(err: io::Error) -> Self {
        TableReadError::Io(err)
    }
}

impl From<TableReadError> for io::Error {
    fn from(err: TableReadError) -> Self {
        match err {
            TableReadError::Io(e) => e,
            TableReadError::Table(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}
