//! Point sampling service
//!
//! Wraps the "reproject a set of points and sample the elevation surface at
//! each" operation of the geospatial backend behind a single trait, so the
//! correction engine and batch driver stay independent of GDAL. The
//! production implementation is [`DemBackend`]; tests substitute a
//! deterministic in-memory surface.

pub mod dem_backend;

pub use dem_backend::DemBackend;

use crate::app::models::{PointBatch, SampledPoint};
use crate::app::services::scratch::ScratchWorkspace;
use crate::Result;

/// External sampling engine contract
///
/// Implementations must return exactly one [`SampledPoint`] per input point.
/// Result order is unspecified; the caller joins by id, never by position.
/// A point outside the surface's valid extent yields the backend's no-data
/// sentinel rather than an error.
pub trait SamplingBackend {
    /// Reproject `batch` into the target CRS and sample the surface at each
    /// point
    ///
    /// `scratch_hint` names the intermediate point and result datasets the
    /// backend persists inside `workspace`; cleanup of those artifacts is
    /// the workspace manager's responsibility, not the backend's.
    fn reproject_and_sample(
        &self,
        batch: &PointBatch,
        workspace: &ScratchWorkspace,
        scratch_hint: &str,
    ) -> Result<Vec<SampledPoint>>;

    /// Elevation value reported for points without a valid sample
    fn no_data_value(&self) -> f64;
}
