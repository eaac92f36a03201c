//! The inspect command: parse-only validation of .cor files
//!
//! Reads each input file, reports record counts and coordinate ranges, and
//! surfaces malformed lines without touching the DEM or writing any output.

use std::path::Path;

use colored::Colorize;
use tracing::error;

use crate::Result;
use crate::app::models::LogRecord;
use crate::app::services::cor_format::parse_file;
use crate::cli::args::InspectArgs;
use crate::cli::input::collect_input_files;

use super::shared::setup_logging;

/// Run the parse-only inspection workflow
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let input_files = collect_input_files(&args.inputs)?;
    if input_files.is_empty() {
        println!("{}", "No .cor files to inspect".yellow());
        return Ok(());
    }

    let mut valid = 0usize;
    for file in &input_files {
        match parse_file(file) {
            Ok(records) => {
                valid += 1;
                if !args.quiet {
                    print_file_report(file, &records);
                }
            }
            Err(e) => {
                error!("{}", e);
                println!("{} {}: {}", "invalid".red(), file.display(), e);
            }
        }
    }

    println!();
    let headline = format!("{}/{} files parsed cleanly", valid, input_files.len());
    if valid == input_files.len() {
        println!("{}", headline.green().bold());
    } else {
        println!("{}", headline.yellow().bold());
    }
    Ok(())
}

fn print_file_report(file: &Path, records: &[LogRecord]) {
    if records.is_empty() {
        println!("{} {}: 0 records", "ok".green(), file.display());
        return;
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    for record in records {
        let lat = record.signed_latitude();
        let lon = record.signed_longitude();
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
    }

    println!(
        "{} {}: {} records, lat {:.6}..{:.6}, lon {:.6}..{:.6}",
        "ok".green(),
        file.display(),
        records.len(),
        min_lat,
        max_lat,
        min_lon,
        max_lon
    );
}
