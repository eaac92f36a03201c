//! Shared components for CLI commands
//!
//! Logging setup and the human-facing batch summary printed after a run.

use colored::Colorize;
use tracing::debug;

use crate::Result;
use crate::app::services::batch::{BatchState, BatchSummary};
use crate::constants::LOG_ENV_VAR;

/// Set up structured logging to stderr
///
/// The filter defaults to this crate at `log_level` and can be overridden
/// through the `COR_PROCESSOR_LOG` environment variable.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("cor_processor={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the batch summary to the console
pub fn print_summary(summary: &BatchSummary) {
    println!();
    match summary.state {
        BatchState::AbortedBeforeStart => {
            println!("{}", "Batch aborted before processing any file".red().bold());
            if let Some(reason) = &summary.abort_reason {
                println!("  {}", reason.red());
            }
            return;
        }
        BatchState::Completed => {
            if summary.files_attempted() == 0 {
                println!("{}", "No .cor files to process".yellow());
                return;
            }
        }
    }

    let headline = format!(
        "Corrected {}/{} files ({} records) in {:.2?}",
        summary.files_succeeded(),
        summary.files_attempted(),
        summary.records_corrected(),
        summary.elapsed
    );
    if summary.is_clean() {
        println!("{}", headline.green().bold());
    } else {
        println!("{}", headline.yellow().bold());
    }

    if summary.overwrites() > 0 {
        println!(
            "  {} existing output file(s) were replaced",
            summary.overwrites()
        );
    }

    for outcome in summary.outcomes.iter().filter(|o| !o.succeeded()) {
        println!(
            "  {} {}: {}",
            "failed".red(),
            outcome.file.display(),
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}
