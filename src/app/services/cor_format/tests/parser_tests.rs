//! Tests for the .cor line and file parser

use super::{EXAMPLE_LINE, example_record};
use crate::Error;
use crate::app::services::cor_format::{parse_line, parse_str};

#[test]
fn parses_valid_line() {
    let record = parse_line(EXAMPLE_LINE, "test.cor", 1).expect("line should parse");
    assert_eq!(record, example_record());
}

#[test]
fn rejects_wrong_field_count() {
    // Nine fields: UNKNOWN is missing
    let line = "A1\t20230101\t120000\t60.123\tN\t24.456\tE\t10.0\tM";
    let err = parse_line(line, "test.cor", 3).unwrap_err();

    match err {
        Error::MalformedRecord { file, line, .. } => {
            assert_eq!(file, "test.cor");
            assert_eq!(line, 3);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn rejects_extra_fields() {
    let line = "A1\t20230101\t120000\t60.123\tN\t24.456\tE\t10.0\tM\tX\tEXTRA";
    assert!(parse_line(line, "test.cor", 1).is_err());
}

#[test]
fn rejects_unparseable_latitude() {
    let line = "A1\t20230101\t120000\tnorth\tN\t24.456\tE\t10.0\tM\tX";
    let err = parse_line(line, "test.cor", 1).unwrap_err();
    assert!(err.to_string().contains("LATITUDE"));
}

#[test]
fn rejects_unparseable_elevation() {
    let line = "A1\t20230101\t120000\t60.123\tN\t24.456\tE\tlow\tM\tX";
    let err = parse_line(line, "test.cor", 1).unwrap_err();
    assert!(err.to_string().contains("GPS_ELEVATION"));
}

#[test]
fn parses_multiple_lines_in_order() {
    let contents = "A1\t20230101\t120000\t60.1\tN\t24.4\tE\t10.0\tM\tX\n\
                    A2\t20230101\t120001\t60.2\tN\t24.5\tE\t11.0\tM\tX\n\
                    A3\t20230101\t120002\t60.3\tN\t24.6\tE\t12.0\tM\tX\n";
    let records = parse_str(contents, "test.cor").expect("file should parse");

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A2", "A3"]);
}

#[test]
fn skips_blank_lines() {
    let contents = "A1\t20230101\t120000\t60.1\tN\t24.4\tE\t10.0\tM\tX\n\n";
    let records = parse_str(contents, "test.cor").unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn empty_file_yields_no_records() {
    let records = parse_str("", "empty.cor").unwrap();
    assert!(records.is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let contents = "A1\t20230101\t120000\t60.1\tN\t24.4\tE\t10.0\tM\tX\n\
                    A1\t20230101\t120001\t60.2\tN\t24.5\tE\t11.0\tM\tX\n";
    let err = parse_str(contents, "test.cor").unwrap_err();
    assert!(err.to_string().contains("duplicate record id 'A1'"));
}

#[test]
fn reports_line_number_of_failure() {
    let contents = "A1\t20230101\t120000\t60.1\tN\t24.4\tE\t10.0\tM\tX\n\
                    broken line\n";
    let err = parse_str(contents, "test.cor").unwrap_err();

    match err {
        Error::MalformedRecord { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}
