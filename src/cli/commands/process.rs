//! The process command: run the batch correction workflow

use tracing::info;

use crate::Result;
use crate::app::services::batch::BatchDriver;
use crate::cli::args::ProcessArgs;
use crate::cli::input::collect_input_files;
use crate::config::Config;

use super::shared::{print_summary, setup_logging};

/// Run the batch correction workflow
///
/// All batch and per-file failures are reported via the log and the
/// printed summary; the command itself returns `Ok` in normal operation.
pub fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let input_files = collect_input_files(&args.inputs)?;
    info!(
        "Processing {} .cor file(s) against DEM '{}'",
        input_files.len(),
        args.dem_path.display()
    );

    let config = build_config(&args, input_files);
    let summary = BatchDriver::new(config).run();

    if !args.quiet {
        print_summary(&summary);
    }
    Ok(())
}

/// Adapt CLI arguments to the batch configuration
fn build_config(args: &ProcessArgs, input_files: Vec<std::path::PathBuf>) -> Config {
    let mut config = Config::new(
        input_files,
        args.dem_path.clone(),
        args.output_dir.clone(),
    );
    config.source_epsg = args.source_epsg;
    config.target_epsg = args.target_epsg;
    config.scratch_root = args.scratch_dir.clone();
    config.show_progress = !args.quiet;
    config
}
