//! Data models for .cor log correction
//!
//! This module contains the core data structures for representing GPR
//! positioning records and the point geometry exchanged with the elevation
//! sampling backend.

use serde::{Deserialize, Serialize};

// =============================================================================
// Log record
// =============================================================================

/// One parsed row of a .cor positioning log
///
/// Field order matches the file schema:
/// `ID, DATE, LOCAL_TIME, LATITUDE, N_S, LONGITUDE, E_W, GPS_ELEVATION,
/// ELEVATION_UNIT, UNKNOWN`.
///
/// `latitude` and `longitude` hold the raw field values; the hemisphere
/// letters are kept verbatim so an untouched record serializes back to its
/// original line. The signed decimal-degree view used for point geometry is
/// derived through [`LogRecord::signed_latitude`] and
/// [`LogRecord::signed_longitude`]. After correction both coordinate fields
/// hold projected values and the hemisphere letters are superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Unique row identifier within one file, the stable sort and merge key
    pub id: String,

    /// Recording date, passed through untouched
    pub date: String,

    /// Local time of day, passed through untouched
    pub local_time: String,

    /// Raw latitude value as logged by the receiver
    pub latitude: f64,

    /// Hemisphere letter for latitude ("N" or "S")
    pub hemisphere_ns: String,

    /// Raw longitude value as logged by the receiver
    pub longitude: f64,

    /// Hemisphere letter for longitude ("E" or "W")
    pub hemisphere_ew: String,

    /// GPS elevation, overwritten with the DEM-sampled value
    pub gps_elevation: f64,

    /// Elevation unit tag (typically "M"), passed through untouched
    pub elevation_unit: String,

    /// Trailing field of unknown semantics, passed through untouched
    pub unknown: String,
}

impl LogRecord {
    /// Latitude in signed decimal degrees, negative on the southern
    /// hemisphere
    pub fn signed_latitude(&self) -> f64 {
        if self.hemisphere_ns.eq_ignore_ascii_case("S") {
            -self.latitude.abs()
        } else {
            self.latitude
        }
    }

    /// Longitude in signed decimal degrees, negative on the western
    /// hemisphere
    pub fn signed_longitude(&self) -> f64 {
        if self.hemisphere_ew.eq_ignore_ascii_case("W") {
            -self.longitude.abs()
        } else {
            self.longitude
        }
    }

    /// Apply a sampling result to this record
    ///
    /// Overwrites the elevation and both coordinate fields; everything else
    /// is left untouched.
    pub fn apply_sample(&mut self, sample: &SampledPoint) {
        self.gps_elevation = sample.elevation;
        self.longitude = sample.x_projected;
        self.latitude = sample.y_projected;
    }
}

// =============================================================================
// Point geometry
// =============================================================================

/// A single point handed to the sampling backend, keyed by record id
#[derive(Debug, Clone, PartialEq)]
pub struct GprPoint {
    /// Merge key back to the originating [`LogRecord`]
    pub id: String,
    /// X coordinate (longitude in the source CRS)
    pub x: f64,
    /// Y coordinate (latitude in the source CRS)
    pub y: f64,
}

/// The point set of one file in the declared source CRS
///
/// Created transiently per file inside the correction engine; exists only
/// for the duration of the sampling round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    /// Points in input row order
    pub points: Vec<GprPoint>,
    /// EPSG code the coordinates are expressed in
    pub source_epsg: u32,
}

impl PointBatch {
    /// Build a batch from parsed records using the signed geographic view
    pub fn from_records(records: &[LogRecord], source_epsg: u32) -> Self {
        let points = records
            .iter()
            .map(|record| GprPoint {
                id: record.id.clone(),
                x: record.signed_longitude(),
                y: record.signed_latitude(),
            })
            .collect();

        Self {
            points,
            source_epsg,
        }
    }

    /// Number of points in the batch
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the batch holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sampling result for one point
///
/// Exactly one per input point; `id` is the join key back to the record.
/// `elevation` carries the no-data sentinel when the point fell outside the
/// raster's valid extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPoint {
    /// Merge key back to the originating record
    pub id: String,
    /// X coordinate in the target CRS
    pub x_projected: f64,
    /// Y coordinate in the target CRS
    pub y_projected: f64,
    /// Elevation sampled from the surface, or the no-data sentinel
    pub elevation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, lat: f64, ns: &str, lon: f64, ew: &str) -> LogRecord {
        LogRecord {
            id: id.to_string(),
            date: "20230101".to_string(),
            local_time: "120000".to_string(),
            latitude: lat,
            hemisphere_ns: ns.to_string(),
            longitude: lon,
            hemisphere_ew: ew.to_string(),
            gps_elevation: 10.0,
            elevation_unit: "M".to_string(),
            unknown: "X".to_string(),
        }
    }

    #[test]
    fn signed_view_applies_hemisphere() {
        let northeast = record("A1", 60.123, "N", 24.456, "E");
        assert_eq!(northeast.signed_latitude(), 60.123);
        assert_eq!(northeast.signed_longitude(), 24.456);

        let southwest = record("A2", 33.9, "S", 18.4, "W");
        assert_eq!(southwest.signed_latitude(), -33.9);
        assert_eq!(southwest.signed_longitude(), -18.4);
    }

    #[test]
    fn signed_view_keeps_raw_fields() {
        let southwest = record("A2", 33.9, "S", 18.4, "W");
        assert_eq!(southwest.latitude, 33.9);
        assert_eq!(southwest.longitude, 18.4);
    }

    #[test]
    fn batch_preserves_order_and_keys() {
        let records = vec![
            record("A1", 60.1, "N", 24.4, "E"),
            record("A2", 60.2, "N", 24.5, "E"),
        ];
        let batch = PointBatch::from_records(&records, 4326);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.source_epsg, 4326);
        assert_eq!(batch.points[0].id, "A1");
        assert_eq!(batch.points[1].id, "A2");
        assert_eq!(batch.points[0].x, 24.4);
        assert_eq!(batch.points[0].y, 60.1);
    }

    #[test]
    fn apply_sample_overwrites_position_and_elevation_only() {
        let mut rec = record("A1", 60.123, "N", 24.456, "E");
        let sample = SampledPoint {
            id: "A1".to_string(),
            x_projected: 385433.2,
            y_projected: 6671838.7,
            elevation: 102.5,
        };

        rec.apply_sample(&sample);

        assert_eq!(rec.longitude, 385433.2);
        assert_eq!(rec.latitude, 6671838.7);
        assert_eq!(rec.gps_elevation, 102.5);
        assert_eq!(rec.id, "A1");
        assert_eq!(rec.date, "20230101");
        assert_eq!(rec.elevation_unit, "M");
        assert_eq!(rec.unknown, "X");
    }
}
