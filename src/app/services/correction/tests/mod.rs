//! Tests for the row correction engine


use std::fs;

use crate::Result;
use crate::app::models::{LogRecord, PointBatch, SampledPoint};
use crate::app::services::sampler::SamplingBackend;
use crate::app::services::scratch::ScratchWorkspace;

/// Deterministic in-memory sampling backend over a planar surface
///
/// Elevation is `0.5 * x + 0.25 * y`; projected coordinates are the source
/// coordinates scaled by 1000. Behavior knobs simulate backend misconduct
/// (dropped or duplicated results) and a finite surface extent.
pub struct PlanarBackend {
    /// Rectangular valid extent `(min_x, min_y, max_x, max_y)` in source
    /// coordinates; points outside sample as no-data
    pub extent: Option<(f64, f64, f64, f64)>,
    /// Return results in reverse point order
    pub reversed: bool,
    /// Ids silently dropped from the result set
    pub drop_ids: Vec<String>,
    /// Duplicate the first result
    pub duplicate_first: bool,
}

impl PlanarBackend {
    pub fn new() -> Self {
        Self {
            extent: None,
            reversed: false,
            drop_ids: Vec::new(),
            duplicate_first: false,
        }
    }

    pub fn elevation_at(x: f64, y: f64) -> f64 {
        0.5 * x + 0.25 * y
    }
}

impl SamplingBackend for PlanarBackend {
    fn reproject_and_sample(
        &self,
        batch: &PointBatch,
        workspace: &ScratchWorkspace,
        scratch_hint: &str,
    ) -> Result<Vec<SampledPoint>> {
        // Persist an intermediate artifact like the real backend would
        fs::write(
            workspace.artifact_path(&format!("Extr_{}.txt", scratch_hint)),
            format!("{} points\n", batch.len()),
        )
        .unwrap();

        let mut samples: Vec<SampledPoint> = batch
            .points
            .iter()
            .filter(|p| !self.drop_ids.contains(&p.id))
            .map(|p| {
                let inside = match self.extent {
                    Some((min_x, min_y, max_x, max_y)) => {
                        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
                    }
                    None => true,
                };
                SampledPoint {
                    id: p.id.clone(),
                    x_projected: p.x * 1000.0,
                    y_projected: p.y * 1000.0,
                    elevation: if inside {
                        Self::elevation_at(p.x, p.y)
                    } else {
                        self.no_data_value()
                    },
                }
            })
            .collect();

        if self.reversed {
            samples.reverse();
        }
        if self.duplicate_first && !samples.is_empty() {
            let first = samples[0].clone();
            samples.push(first);
        }

        Ok(samples)
    }

    fn no_data_value(&self) -> f64 {
        crate::constants::NO_DATA_ELEVATION
    }
}

/// Build a minimal record for correction tests
pub fn record(id: &str, lat: f64, lon: f64) -> LogRecord {
    LogRecord {
        id: id.to_string(),
        date: "20230101".to_string(),
        local_time: "120000".to_string(),
        latitude: lat,
        hemisphere_ns: "N".to_string(),
        longitude: lon,
        hemisphere_ew: "E".to_string(),
        gps_elevation: 10.0,
        elevation_unit: "M".to_string(),
        unknown: "X".to_string(),
    }
}

/// Acquire a throwaway workspace rooted in a fresh temp directory
///
/// Returns the root guard alongside so the directory outlives the test body.
pub fn test_workspace() -> (tempfile::TempDir, ScratchWorkspace) {
    let root = tempfile::tempdir().unwrap();
    let mut manager =
        crate::app::services::scratch::ScratchManager::new(root.path().to_path_buf());
    let workspace = manager.acquire("cor_test").unwrap();
    (root, workspace)
}
