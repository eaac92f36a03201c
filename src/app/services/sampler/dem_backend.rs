//! GDAL-backed elevation sampling
//!
//! Opens the DEM raster once per batch and serves all per-file sampling
//! requests from the same dataset handle. Points arrive in the source
//! (geographic) CRS and are transformed twice: into the raster's own
//! declared CRS to locate the sample cell, and into the target projected
//! CRS to produce the corrected output coordinates. Sampling in the
//! raster's native CRS avoids a double reprojection error when the DEM is
//! not stored in the target system.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use gdal::Dataset;
use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};
use tracing::{debug, info};

use crate::app::models::{PointBatch, SampledPoint};
use crate::app::services::scratch::ScratchWorkspace;
use crate::constants::NO_DATA_ELEVATION;
use crate::{Error, Result};

use super::SamplingBackend;

/// Elevation sampling backend reading a DEM raster through GDAL
pub struct DemBackend {
    dataset: Dataset,
    geo_transform: [f64; 6],
    raster_size: (usize, usize),
    no_data: f64,
    to_surface: CoordTransform,
    to_target: CoordTransform,
    dem_path: String,
}

impl DemBackend {
    /// Open the DEM and prepare the coordinate transforms
    ///
    /// Fails with [`Error::SurfaceAccess`] when the raster cannot be opened
    /// or read; the batch driver treats that as fatal to the whole run.
    pub fn open(dem_path: &Path, source_epsg: u32, target_epsg: u32) -> Result<Self> {
        let dem_display = dem_path.display().to_string();

        let dataset = Dataset::open(dem_path)
            .map_err(|e| Error::surface_access(&dem_display, e.to_string()))?;
        let geo_transform = dataset
            .geo_transform()
            .map_err(|e| Error::surface_access(&dem_display, e.to_string()))?;
        let raster_size = dataset.raster_size();

        let no_data = {
            let band = dataset
                .rasterband(1)
                .map_err(|e| Error::surface_access(&dem_display, e.to_string()))?;
            band.no_data_value().unwrap_or(NO_DATA_ELEVATION)
        };

        let mut surface_ref = dataset
            .spatial_ref()
            .map_err(|e| Error::surface_access(&dem_display, e.to_string()))?;
        surface_ref.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);

        let source_ref = spatial_ref_from_epsg(source_epsg)?;
        let target_ref = spatial_ref_from_epsg(target_epsg)?;

        let to_surface = CoordTransform::new(&source_ref, &surface_ref)
            .map_err(|e| Error::external_engine("cannot build source-to-surface transform", e))?;
        let to_target = CoordTransform::new(&source_ref, &target_ref)
            .map_err(|e| Error::external_engine("cannot build source-to-target transform", e))?;

        info!(
            "Opened elevation surface '{}' ({}x{} cells, no-data {})",
            dem_display, raster_size.0, raster_size.1, no_data
        );

        Ok(Self {
            dataset,
            geo_transform,
            raster_size,
            no_data,
            to_surface,
            to_target,
            dem_path: dem_display,
        })
    }

    /// Path of the opened raster
    pub fn dem_path(&self) -> &str {
        &self.dem_path
    }

    /// Sample band 1 at one already-transformed surface-CRS coordinate
    fn sample_cell(&self, x: f64, y: f64) -> Result<f64> {
        let (col, row) = world_to_pixel(&self.geo_transform, x, y);
        let (width, height) = self.raster_size;

        if col < 0.0 || row < 0.0 {
            return Ok(self.no_data);
        }
        let (col, row) = (col.floor() as usize, row.floor() as usize);
        if col >= width || row >= height {
            return Ok(self.no_data);
        }

        let band = self
            .dataset
            .rasterband(1)
            .map_err(|e| Error::external_engine("cannot access raster band", e))?;
        let buffer = band
            .read_as::<f64>((col as isize, row as isize), (1, 1), (1, 1), None)
            .map_err(|e| {
                Error::external_engine(
                    format!("cannot read cell ({}, {}) of '{}'", col, row, self.dem_path),
                    e,
                )
            })?;

        Ok(buffer.data().first().copied().unwrap_or(self.no_data))
    }
}

impl SamplingBackend for DemBackend {
    fn reproject_and_sample(
        &self,
        batch: &PointBatch,
        workspace: &ScratchWorkspace,
        scratch_hint: &str,
    ) -> Result<Vec<SampledPoint>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        persist_point_dataset(workspace, scratch_hint, batch)?;

        // One vectorized transform per CRS for the whole batch
        let mut surface_x: Vec<f64> = batch.points.iter().map(|p| p.x).collect();
        let mut surface_y: Vec<f64> = batch.points.iter().map(|p| p.y).collect();
        let mut surface_z = vec![0.0; batch.len()];
        self.to_surface
            .transform_coords(&mut surface_x, &mut surface_y, &mut surface_z)
            .map_err(|e| Error::external_engine("reprojection to surface CRS failed", e))?;

        let mut target_x: Vec<f64> = batch.points.iter().map(|p| p.x).collect();
        let mut target_y: Vec<f64> = batch.points.iter().map(|p| p.y).collect();
        let mut target_z = vec![0.0; batch.len()];
        self.to_target
            .transform_coords(&mut target_x, &mut target_y, &mut target_z)
            .map_err(|e| Error::external_engine("reprojection to target CRS failed", e))?;

        let mut samples = Vec::with_capacity(batch.len());
        for (index, point) in batch.points.iter().enumerate() {
            let elevation = self.sample_cell(surface_x[index], surface_y[index])?;
            samples.push(SampledPoint {
                id: point.id.clone(),
                x_projected: target_x[index],
                y_projected: target_y[index],
                elevation,
            });
        }

        persist_result_dataset(workspace, scratch_hint, &samples)?;
        debug!(
            "Sampled {} points for '{}' against '{}'",
            samples.len(),
            scratch_hint,
            self.dem_path
        );

        Ok(samples)
    }

    fn no_data_value(&self) -> f64 {
        self.no_data
    }
}

/// Build a spatial reference for an EPSG code with x/y axis order
fn spatial_ref_from_epsg(epsg: u32) -> Result<SpatialRef> {
    let mut spatial_ref = SpatialRef::from_epsg(epsg)
        .map_err(|e| Error::external_engine(format!("unknown EPSG code {}", epsg), e))?;
    // GDAL 3 defaults EPSG:4326 to latitude-first authority order; points are
    // always handed over as (x=lon, y=lat)
    spatial_ref.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
    Ok(spatial_ref)
}

/// Invert the affine geotransform to fractional (column, row) coordinates
pub(crate) fn world_to_pixel(geo_transform: &[f64; 6], x: f64, y: f64) -> (f64, f64) {
    let [origin_x, pixel_w, rot_x, origin_y, rot_y, pixel_h] = *geo_transform;
    let det = pixel_w * pixel_h - rot_x * rot_y;

    let dx = x - origin_x;
    let dy = y - origin_y;
    let col = (pixel_h * dx - rot_x * dy) / det;
    let row = (pixel_w * dy - rot_y * dx) / det;
    (col, row)
}

fn persist_point_dataset(
    workspace: &ScratchWorkspace,
    scratch_hint: &str,
    batch: &PointBatch,
) -> Result<()> {
    let mut contents = String::new();
    for point in &batch.points {
        let _ = writeln!(contents, "{}\t{}\t{}", point.id, point.x, point.y);
    }

    let path = workspace.artifact_path(&format!("Extr_{}.txt", scratch_hint));
    fs::write(&path, contents)
        .map_err(|e| Error::io(format!("Failed to persist point dataset '{}'", path.display()), e))
}

fn persist_result_dataset(
    workspace: &ScratchWorkspace,
    scratch_hint: &str,
    samples: &[SampledPoint],
) -> Result<()> {
    let mut contents = String::new();
    for sample in samples {
        let _ = writeln!(
            contents,
            "{}\t{}\t{}\t{}",
            sample.id, sample.x_projected, sample.y_projected, sample.elevation
        );
    }

    let path = workspace.artifact_path(&format!("Values_{}.txt", scratch_hint));
    fs::write(&path, contents)
        .map_err(|e| Error::io(format!("Failed to persist result dataset '{}'", path.display()), e))
}
