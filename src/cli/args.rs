//! Command-line argument definitions for the cor processor
//!
//! The complete CLI interface using the clap derive API. The `process`
//! subcommand runs the batch correction; `inspect` parses input files
//! without touching the DEM or writing output.

use crate::constants::{DEFAULT_SOURCE_EPSG, DEFAULT_TARGET_EPSG};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the GPR .cor correction tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cor-processor",
    version,
    about = "Correct GPR .cor positioning logs against a lidar DEM",
    long_about = "Batch tool that corrects GPR .cor positioning log files: each point's \
                  horizontal position is reprojected into a target coordinate system and \
                  its GPS elevation is replaced by a value sampled from a reference lidar \
                  DEM. Corrected files keep the original 10-field tab-separated format."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Correct .cor files against a DEM and write them to the output directory
    Process(ProcessArgs),
    /// Parse .cor files and report their contents without writing anything
    Inspect(InspectArgs),
}

/// Arguments for the process command (main correction workflow)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input .cor files, directories (scanned recursively) or glob patterns
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<String>,

    /// Path to the lidar DEM raster sampled for elevations
    #[arg(long = "dem", value_name = "PATH", help = "Path to the lidar DEM raster")]
    pub dem_path: PathBuf,

    /// Directory the corrected files are written into
    ///
    /// Must already exist; files with the same name are overwritten with a
    /// notice in the log.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for corrected files"
    )]
    pub output_dir: PathBuf,

    /// EPSG code of the corrected output coordinates
    #[arg(
        long = "target-epsg",
        value_name = "CODE",
        default_value_t = DEFAULT_TARGET_EPSG,
        help = "EPSG code of the target projected CRS"
    )]
    pub target_epsg: u32,

    /// EPSG code of the GPS receiver coordinates
    #[arg(
        long = "source-epsg",
        value_name = "CODE",
        default_value_t = DEFAULT_SOURCE_EPSG,
        help = "EPSG code of the source geographic CRS"
    )]
    pub source_epsg: u32,

    /// Root directory for the temporary scratch workspace
    #[arg(
        long = "scratch-dir",
        value_name = "PATH",
        help = "Root directory for the scratch workspace (defaults to the system temp dir)"
    )]
    pub scratch_dir: Option<PathBuf>,

    /// Suppress progress output, log warnings and errors only
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level for diagnostics"
    )]
    pub log_level: String,
}

impl ProcessArgs {
    /// Effective log level, forced down to warnings in quiet mode
    pub fn get_log_level(&self) -> &str {
        if self.quiet { "warn" } else { &self.log_level }
    }
}

/// Arguments for the inspect command (parse-only validation)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input .cor files, directories (scanned recursively) or glob patterns
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<String>,

    /// Suppress per-file detail, log warnings and errors only
    #[arg(short = 'q', long = "quiet", help = "Suppress per-file detail")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level for diagnostics"
    )]
    pub log_level: String,
}

impl InspectArgs {
    /// Effective log level, forced down to warnings in quiet mode
    pub fn get_log_level(&self) -> &str {
        if self.quiet { "warn" } else { &self.log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_process_command_with_defaults() {
        let args = Args::parse_from([
            "cor-processor",
            "process",
            "line_01.cor",
            "--dem",
            "dem.tif",
            "-o",
            "out",
        ]);

        match args.command {
            Some(Commands::Process(process)) => {
                assert_eq!(process.inputs, vec!["line_01.cor"]);
                assert_eq!(process.target_epsg, DEFAULT_TARGET_EPSG);
                assert_eq!(process.source_epsg, DEFAULT_SOURCE_EPSG);
                assert!(!process.quiet);
            }
            other => panic!("expected process command, got {:?}", other),
        }
    }

    #[test]
    fn quiet_mode_lowers_log_level() {
        let args = Args::parse_from([
            "cor-processor",
            "process",
            "a.cor",
            "--dem",
            "dem.tif",
            "-o",
            "out",
            "--quiet",
        ]);
        if let Some(Commands::Process(process)) = args.command {
            assert_eq!(process.get_log_level(), "warn");
        } else {
            panic!("expected process command");
        }
    }

    #[test]
    fn process_requires_inputs() {
        let result =
            Args::try_parse_from(["cor-processor", "process", "--dem", "dem.tif", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_inspect_command() {
        let args = Args::parse_from(["cor-processor", "inspect", "lines/"]);
        assert!(matches!(args.command, Some(Commands::Inspect(_))));
    }
}
