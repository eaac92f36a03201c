//! Parsing and serialization of the .cor positioning log format
//!
//! A .cor file is tab-separated text without a header line, one record per
//! line, with exactly ten positional fields:
//!
//! ```text
//! ID  DATE  LOCAL_TIME  LATITUDE  N_S  LONGITUDE  E_W  GPS_ELEVATION  ELEVATION_UNIT  UNKNOWN
//! ```
//!
//! The parser validates arity and numeric fields per line and rejects
//! duplicate record ids, which would break the merge back from the sampling
//! backend. The serializer re-joins fields in the same fixed order so an
//! untouched record round-trips to its original line up to canonical float
//! formatting.

pub mod parser;
pub mod serializer;

#[cfg(test)]
pub mod tests;

pub use parser::{parse_file, parse_line, parse_str};
pub use serializer::{format_coordinate, serialize_record, serialize_records};
