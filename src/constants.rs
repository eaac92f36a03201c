//! Constants for .cor log processing
//!
//! Central location for the fixed .cor schema, coordinate reference system
//! defaults, and the no-data sentinel used when a point falls outside the
//! elevation surface.

/// Field separator of the .cor log format
pub const SEPARATOR: char = '\t';

/// Number of positional fields in one .cor record
pub const FIELD_COUNT: usize = 10;

/// Positional field names of the .cor schema, in file order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "ID",
    "DATE",
    "LOCAL_TIME",
    "LATITUDE",
    "N_S",
    "LONGITUDE",
    "E_W",
    "GPS_ELEVATION",
    "ELEVATION_UNIT",
    "UNKNOWN",
];

/// File extension of GPR positioning logs
pub const COR_EXTENSION: &str = "cor";

/// Default source CRS of the GPS receiver coordinates (WGS 84 geographic)
pub const DEFAULT_SOURCE_EPSG: u32 = 4326;

/// Default target CRS of the corrected coordinates (ETRS89 / TM35FIN)
pub const DEFAULT_TARGET_EPSG: u32 = 3067;

/// Elevation value written when a point falls outside the DEM extent and
/// the raster does not declare its own no-data value
pub const NO_DATA_ELEVATION: f64 = -9999.0;

/// Name hint for the per-run scratch workspace directory
pub const SCRATCH_NAME_HINT: &str = "cor_temp";

/// Environment variable consulted by the tracing filter
pub const LOG_ENV_VAR: &str = "COR_PROCESSOR_LOG";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_ten_fields() {
        assert_eq!(FIELD_NAMES.len(), FIELD_COUNT);
        assert_eq!(FIELD_NAMES[0], "ID");
        assert_eq!(FIELD_NAMES[FIELD_COUNT - 1], "UNKNOWN");
    }
}
