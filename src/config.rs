//! Configuration management and validation.
//!
//! All settings of a batch run are threaded through this structure
//! explicitly: input files, the elevation raster, the output directory and
//! the coordinate reference systems. There is no process-global state; the
//! batch driver owns the configuration for the duration of the run.

use crate::constants::{DEFAULT_SOURCE_EPSG, DEFAULT_TARGET_EPSG};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one batch correction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input .cor files, processed strictly in this order
    pub input_files: Vec<PathBuf>,

    /// Path to the lidar DEM raster sampled for elevations
    pub dem_path: PathBuf,

    /// Directory the corrected files are written into
    ///
    /// Must exist before a file is written; a missing directory aborts the
    /// affected file, not the batch.
    pub output_dir: PathBuf,

    /// EPSG code of the GPS receiver coordinates
    pub source_epsg: u32,

    /// EPSG code of the corrected output coordinates
    pub target_epsg: u32,

    /// Root directory for the temporary scratch workspace
    ///
    /// Defaults to the system temp directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_root: Option<PathBuf>,

    /// Show per-file progress on the console
    #[serde(default)]
    pub show_progress: bool,
}

impl Config {
    /// Create a configuration with default CRS settings
    pub fn new(input_files: Vec<PathBuf>, dem_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_files,
            dem_path,
            output_dir,
            source_epsg: DEFAULT_SOURCE_EPSG,
            target_epsg: DEFAULT_TARGET_EPSG,
            scratch_root: None,
            show_progress: false,
        }
    }

    /// Validate settings that can be checked without touching the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.dem_path.as_os_str().is_empty() {
            return Err(Error::configuration("DEM raster path must not be empty"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory must not be empty"));
        }
        if self.source_epsg == 0 {
            return Err(Error::configuration("Source EPSG code must be non-zero"));
        }
        if self.target_epsg == 0 {
            return Err(Error::configuration("Target EPSG code must be non-zero"));
        }
        Ok(())
    }

    /// Root directory for scratch workspaces, falling back to the system
    /// temp directory
    pub fn scratch_root(&self) -> PathBuf {
        self.scratch_root
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(
            vec![PathBuf::from("line_01.cor")],
            PathBuf::from("dem.tif"),
            PathBuf::from("/tmp/out"),
        )
    }

    #[test]
    fn default_crs_codes() {
        let config = test_config();
        assert_eq!(config.source_epsg, 4326);
        assert_eq!(config.target_epsg, 3067);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_dem_path_rejected() {
        let mut config = test_config();
        config.dem_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_epsg_rejected() {
        let mut config = test_config();
        config.target_epsg = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn scratch_root_falls_back_to_temp() {
        let config = test_config();
        assert_eq!(config.scratch_root(), std::env::temp_dir());
    }
}
