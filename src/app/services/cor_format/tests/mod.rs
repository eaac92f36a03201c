//! Tests for .cor parsing and serialization

pub mod parser_tests;
pub mod serializer_tests;

use crate::app::models::LogRecord;

/// The example line used throughout the format tests
pub const EXAMPLE_LINE: &str = "A1\t20230101\t120000\t60.123\tN\t24.456\tE\t10.0\tM\tX";

/// Build a record matching [`EXAMPLE_LINE`]
pub fn example_record() -> LogRecord {
    LogRecord {
        id: "A1".to_string(),
        date: "20230101".to_string(),
        local_time: "120000".to_string(),
        latitude: 60.123,
        hemisphere_ns: "N".to_string(),
        longitude: 24.456,
        hemisphere_ew: "E".to_string(),
        gps_elevation: 10.0,
        elevation_unit: "M".to_string(),
        unknown: "X".to_string(),
    }
}
