//! Tests for .cor serialization and the round-trip property

use super::{EXAMPLE_LINE, example_record};
use crate::app::services::cor_format::{
    format_coordinate, parse_line, serialize_record, serialize_records,
};

#[test]
fn serializes_example_record() {
    assert_eq!(serialize_record(&example_record()), EXAMPLE_LINE);
}

#[test]
fn round_trip_is_identity_for_untouched_record() {
    let record = parse_line(EXAMPLE_LINE, "test.cor", 1).unwrap();
    assert_eq!(serialize_record(&record), EXAMPLE_LINE);
}

#[test]
fn round_trip_preserves_negative_coordinates() {
    let line = "B7\t20221130\t093015\t-33.918\tS\t18.423\tE\t45.7\tM\t0";
    let record = parse_line(line, "test.cor", 1).unwrap();
    assert_eq!(serialize_record(&record), line);
}

#[test]
fn integral_floats_keep_one_decimal() {
    assert_eq!(format_coordinate(10.0), "10.0");
    assert_eq!(format_coordinate(-9999.0), "-9999.0");
    assert_eq!(format_coordinate(0.0), "0.0");
}

#[test]
fn fractional_floats_use_shortest_representation() {
    assert_eq!(format_coordinate(60.123), "60.123");
    assert_eq!(format_coordinate(385433.25), "385433.25");
    assert_eq!(format_coordinate(-0.5), "-0.5");
}

#[test]
fn file_output_has_no_header_and_one_line_per_record() {
    let records = vec![example_record(), example_record()];
    let contents = serialize_records(&records);

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], EXAMPLE_LINE);
    assert!(contents.ends_with('\n'));
}

#[test]
fn empty_record_set_serializes_to_empty_string() {
    assert_eq!(serialize_records(&[]), "");
}
