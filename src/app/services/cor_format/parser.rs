//! Line-level parsing of .cor records

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::app::models::LogRecord;
use crate::constants::{FIELD_COUNT, SEPARATOR};
use crate::{Error, Result};

/// Parse one line of a .cor file into a [`LogRecord`]
///
/// `file` and `line_no` are used for error context only; `line_no` is
/// 1-based.
pub fn parse_line(line: &str, file: &str, line_no: usize) -> Result<LogRecord> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(Error::malformed_record(
            file,
            line_no,
            format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let latitude = parse_float(fields[3], "LATITUDE", file, line_no)?;
    let longitude = parse_float(fields[5], "LONGITUDE", file, line_no)?;
    let gps_elevation = parse_float(fields[7], "GPS_ELEVATION", file, line_no)?;

    Ok(LogRecord {
        id: fields[0].to_string(),
        date: fields[1].to_string(),
        local_time: fields[2].to_string(),
        latitude,
        hemisphere_ns: fields[4].to_string(),
        longitude,
        hemisphere_ew: fields[6].to_string(),
        gps_elevation,
        elevation_unit: fields[8].to_string(),
        unknown: fields[9].to_string(),
    })
}

/// Parse the full contents of a .cor file, preserving row order
///
/// Empty lines (typically a trailing newline) are skipped. Duplicate ids
/// violate the merge-key invariant and fail the whole file.
pub fn parse_str(contents: &str, file: &str) -> Result<Vec<LogRecord>> {
    let mut records = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_line(line, file, index + 1)?;
        if !seen_ids.insert(record.id.clone()) {
            return Err(Error::malformed_record(
                file,
                index + 1,
                format!("duplicate record id '{}'", record.id),
            ));
        }
        records.push(record);
    }

    debug!("Parsed {} records from '{}'", records.len(), file);
    Ok(records)
}

/// Read and parse a .cor file from disk
pub fn parse_file(path: &Path) -> Result<Vec<LogRecord>> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read '{}'", display), e))?;
    parse_str(&contents, &display)
}

fn parse_float(value: &str, field_name: &str, file: &str, line_no: usize) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        Error::malformed_record(
            file,
            line_no,
            format!("field {} is not a valid float: '{}'", field_name, value),
        )
    })
}
