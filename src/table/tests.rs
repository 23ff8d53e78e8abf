//! Tests for the table module

use super::*;

const SINGLE_OUTPUT: &str = "A B C D=
                             0 0 0 0
                             0 0 1 1
                             0 1 0 1
                             0 1 1 0
                             1 0 0 1
                             1 0 1 0
                             1 1 0 0
                             1 1 1 1";

const MULTIPLE_OUTPUTS: &str = "A B C D= E=
                                0 0 0 0 1
                                0 0 1 1 0
                                0 1 0 1 0
                                0 1 1 0 1
                                1 0 0 1 0
                                1 0 1 0 1
                                1 1 0 0 1
                                1 1 1 1 0";

fn names(vars: &[Arc<str>]) -> Vec<&str> {
    vars.iter().map(|v| v.as_ref()).collect()
}

fn bits(values: &[u8]) -> Vec<bool> {
    values.iter().map(|&v| v == 1).collect()
}

#[test]
fn test_parse_single_output() {
    let table = TruthTable::parse(SINGLE_OUTPUT).unwrap();
    assert_eq!(names(table.input_vars()), vec!["A", "B", "C"]);
    assert_eq!(names(table.output_vars()), vec!["D"]);
    assert_eq!(table.num_rows(), 8);
    assert_eq!(table.rows()[1].inputs(), bits(&[0, 0, 1]).as_slice());
    assert_eq!(table.rows()[1].outputs(), bits(&[1]).as_slice());
    assert_eq!(table.column(0), bits(&[0, 1, 1, 0, 1, 0, 0, 1]));
    assert_eq!(table.minterms(0), vec![1, 2, 4, 7]);
}

#[test]
fn test_parse_implicit_output() {
    let table = TruthTable::parse("A B\n0 0\n0 1\n1 0\n1 1").unwrap();
    assert_eq!(names(table.input_vars()), vec!["A"]);
    assert_eq!(names(table.output_vars()), vec!["B"]);
    assert_eq!(table.column(0), bits(&[0, 1, 0, 1]));
}

#[test]
fn test_parse_multiple_outputs() {
    let table = TruthTable::parse(MULTIPLE_OUTPUTS).unwrap();
    assert_eq!(names(table.input_vars()), vec!["A", "B", "C"]);
    assert_eq!(names(table.output_vars()), vec!["D", "E"]);
    assert_eq!(table.rows()[0].outputs(), bits(&[0, 1]).as_slice());
    assert_eq!(table.minterms(1), vec![0, 3, 5, 6]);
}

#[test]
fn test_output_markers() {
    assert!(is_output_var("D="));
    assert!(is_output_var("=D"));
    assert!(is_output_var("out"));
    assert!(is_output_var("Output"));
    assert!(is_output_var("OUTX"));
    assert!(!is_output_var("A"));
    assert!(!is_output_var("ou"));
    assert!(!is_output_var("scout"));
    assert_eq!(variable_name("=D=").as_ref(), "D");
    assert_eq!(variable_name("out2").as_ref(), "out2");
}

#[test]
fn test_output_columns_may_sit_anywhere() {
    let table = TruthTable::parse("OUT A\n1 0\n0 1").unwrap();
    assert_eq!(names(table.input_vars()), vec!["A"]);
    assert_eq!(names(table.output_vars()), vec!["OUT"]);
    assert_eq!(table.column(0), bits(&[1, 0]));
    assert_eq!(table.rows()[1].inputs(), bits(&[1]).as_slice());
}

#[test]
fn test_separators_and_blank_lines() {
    let text = "\n  A, B | Y=\n\n 0,0 | 1\n0,1|0\n 1, 0 | 0 \n1,1|1\n\n";
    let table = TruthTable::parse(text).unwrap();
    assert_eq!(names(table.input_vars()), vec!["A", "B"]);
    assert_eq!(names(table.output_vars()), vec!["Y"]);
    assert_eq!(table.minterms(0), vec![0, 3]);
}

#[test]
fn test_from_str() {
    let table: TruthTable = SINGLE_OUTPUT.parse().unwrap();
    assert_eq!(table.num_inputs(), 3);
    assert_eq!(table.num_outputs(), 1);
}

#[test]
fn test_from_reader() {
    let table = TruthTable::from_reader(MULTIPLE_OUTPUTS.as_bytes()).unwrap();
    assert_eq!(table.num_outputs(), 2);
}

#[test]
fn test_assignment_index() {
    let row = Row::new(&bits(&[1, 0, 1]), &bits(&[0]));
    assert_eq!(row.assignment_index(), 5);
}

// ===== Error cases =====

#[test]
fn test_missing_header() {
    assert_eq!(TruthTable::parse(""), Err(TableError::MissingHeader));
    assert_eq!(TruthTable::parse("  \n \n"), Err(TableError::MissingHeader));
}

#[test]
fn test_no_rows() {
    assert_eq!(TruthTable::parse("A B="), Err(TableError::NoRows));
}

#[test]
fn test_invalid_cell() {
    let err = TruthTable::parse("A B=\n0 0\n0 x").unwrap_err();
    assert_eq!(
        err,
        TableError::InvalidCell {
            line: 3,
            column: 1,
            value: Arc::from("x"),
        }
    );
}

#[test]
fn test_non_binary_cell() {
    let err = TruthTable::parse("A B=\n0 2").unwrap_err();
    assert_eq!(
        err,
        TableError::NonBinaryCell {
            line: 2,
            column: 1,
            value: 2,
        }
    );
}

#[test]
fn test_row_width_mismatch() {
    let err = TruthTable::parse("A B C=\n0 0 1\n0 1").unwrap_err();
    assert_eq!(
        err,
        TableError::RowWidthMismatch {
            line: 3,
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn test_duplicate_variable() {
    let err = TruthTable::parse("A A=\n0 1").unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateVariable {
            name: Arc::from("A"),
        }
    );
}

#[test]
fn test_empty_variable_name() {
    let err = TruthTable::parse("A =\n0 1").unwrap_err();
    assert!(matches!(err, TableError::EmptyVariableName { .. }));
}

#[test]
fn test_too_many_rows() {
    let table = TruthTable::parse("A B=\n0 0\n1 1\n0 1").unwrap();
    assert_eq!(
        table.check_row_count(),
        Err(TableError::TooManyRows { rows: 3, max: 2 })
    );
    assert_eq!(TruthTable::parse(SINGLE_OUTPUT).unwrap().check_row_count(), Ok(()));
}

#[test]
fn test_new_rejects_row_shape() {
    let err = TruthTable::new(
        vec![Arc::from("A")],
        vec![Arc::from("Y")],
        vec![Row::new(&bits(&[0, 1]), &bits(&[1]))],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TableError::RowShapeMismatch {
            row: 0,
            expected_inputs: 1,
            actual_inputs: 2,
            ..
        }
    ));
}

#[test]
fn test_partial_table_is_accepted() {
    // Fewer rows than assignments: minterm numbering follows row order
    let table = TruthTable::parse("A B Y=\n0 0 0\n0 1 1").unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.minterms(0), vec![1]);
}

#[test]
fn test_constant_names_rejected() {
    for text in ["0 1 Y=\n0 0 0", "A 1=\n0 1", "out 0\n1 0"] {
        let err = TruthTable::parse(text).unwrap_err();
        assert!(
            matches!(
                err,
                TableError::InvalidVariableName { ref name } if matches!(name.as_ref(), "0" | "1")
            ),
            "{:?}: {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_new_rejects_unreadable_names() {
    let err = TruthTable::new(
        vec![Arc::from("a b")],
        vec![Arc::from("Y")],
        vec![Row::new(&bits(&[0]), &bits(&[1]))],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TableError::InvalidVariableName {
            name: Arc::from("a b"),
        }
    );
}

#[test]
fn test_unicode_and_digit_names() {
    let table = TruthTable::parse("α 10 Y=\n0 0 0\n0 1 1\n1 0 1\n1 1 1").unwrap();
    assert_eq!(names(table.input_vars()), vec!["α", "10"]);
    assert_eq!(names(table.output_vars()), vec!["Y"]);
}

#[test]
fn test_too_many_inputs() {
    let names: Vec<Arc<str>> = (0..=MAX_INPUTS).map(|i| Arc::from(format!("x{}", i))).collect();
    let table = TruthTable::new(
        names,
        vec![Arc::from("Y")],
        vec![Row::new(&vec![false; MAX_INPUTS + 1], &bits(&[1]))],
    )
    .unwrap();
    assert_eq!(
        table.check_row_count(),
        Err(TableError::TooManyInputs {
            inputs: MAX_INPUTS + 1,
            max: MAX_INPUTS,
        })
    );

    let names: Vec<Arc<str>> = (0..MAX_INPUTS).map(|i| Arc::from(format!("x{}", i))).collect();
    let table = TruthTable::new(
        names,
        vec![Arc::from("Y")],
        vec![Row::new(&vec![false; MAX_INPUTS], &bits(&[1]))],
    )
    .unwrap();
    assert_eq!(table.check_row_count(), Ok(()));
}
