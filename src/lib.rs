//! cor_processor library
//!
//! A Rust library for correcting GPR `.cor` positioning log files against a
//! reference lidar DEM.
//!
//! This library provides tools for:
//! - Parsing the fixed 10-field tab-separated `.cor` log format
//! - Sampling a DEM raster at each recorded point via GDAL
//! - Reprojecting GPS coordinates into a target projected CRS
//! - Merging sampled elevations back into the original row order
//! - Batch processing with per-file failure isolation and scratch
//!   workspace cleanup on every exit path

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch;
        pub mod cor_format;
        pub mod correction;
        pub mod sampler;
        pub mod scratch;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{LogRecord, PointBatch, SampledPoint};
pub use config::Config;

/// Result type alias for cor processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for `.cor` correction operations
///
/// Per-file errors (`MalformedRecord`, `MergeKeyMismatch`,
/// `OutputDirectoryMissing`, `ExternalEngine`) are caught at the batch
/// driver's per-file boundary and never abort the run. `WorkspaceCreation`
/// and `SurfaceAccess` are raised before any file is processed and abort
/// the whole batch.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line does not match the fixed 10-field .cor schema
    #[error("Malformed record in '{file}' line {line}: {message}")]
    MalformedRecord {
        file: String,
        line: usize,
        message: String,
    },

    /// The scratch workspace could not be created
    #[error("Failed to create scratch workspace: {message}")]
    WorkspaceCreation {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The elevation raster could not be opened or read
    #[error("Cannot access elevation surface '{path}': {message}")]
    SurfaceAccess { path: String, message: String },

    /// Sampling did not return exactly one result per input point
    #[error("Merge key mismatch in '{file}': {message}")]
    MergeKeyMismatch { file: String, message: String },

    /// The configured output directory does not exist
    #[error("Output directory does not exist. Check path: {path}")]
    OutputDirectoryMissing { path: String },

    /// The geospatial backend raised a generic failure
    #[error("Geospatial engine error: {message}")]
    ExternalEngine {
        message: String,
        #[source]
        source: Option<gdal::errors::GdalError>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error while collecting input files
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error for a line of an input file
    pub fn malformed_record(
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a workspace creation error
    pub fn workspace_creation(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::WorkspaceCreation {
            message: message.into(),
            source,
        }
    }

    /// Create a surface access error
    pub fn surface_access(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SurfaceAccess {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a merge key mismatch error
    pub fn merge_key_mismatch(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MergeKeyMismatch {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an output directory missing error
    pub fn output_directory_missing(path: impl Into<String>) -> Self {
        Self::OutputDirectoryMissing { path: path.into() }
    }

    /// Create an external engine error with backend-provided detail
    pub fn external_engine(message: impl Into<String>, source: gdal::errors::GdalError) -> Self {
        Self::ExternalEngine {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an external engine error without an underlying GDAL cause
    pub fn engine_message(message: impl Into<String>) -> Self {
        Self::ExternalEngine {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<gdal::errors::GdalError> for Error {
    fn from(error: gdal::errors::GdalError) -> Self {
        Self::ExternalEngine {
            message: "GDAL operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
