//! Serialization of corrected records back to .cor text

use crate::app::models::LogRecord;
use crate::constants::SEPARATOR;

/// Format a coordinate or elevation for .cor output
///
/// Integral values keep one decimal place (`10.0`, not `10`) so receivers
/// that logged `10.0` round-trip unchanged; fractional values use the
/// shortest exact representation.
pub fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Serialize one record to a single .cor line, without trailing newline
pub fn serialize_record(record: &LogRecord) -> String {
    let fields = [
        record.id.as_str(),
        record.date.as_str(),
        record.local_time.as_str(),
        &format_coordinate(record.latitude),
        record.hemisphere_ns.as_str(),
        &format_coordinate(record.longitude),
        record.hemisphere_ew.as_str(),
        &format_coordinate(record.gps_elevation),
        record.elevation_unit.as_str(),
        record.unknown.as_str(),
    ];

    fields.join(&SEPARATOR.to_string())
}

/// Serialize an ordered record sequence to full file contents, no header
pub fn serialize_records(records: &[LogRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&serialize_record(record));
        out.push('\n');
    }
    out
}
