//! Command implementations for the cor processor CLI
//!
//! Each subcommand lives in its own module. Commands report all batch and
//! per-file failures through the operator log and the printed summary;
//! they only return an error for failures of the command plumbing itself.

pub mod inspect;
pub mod process;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => unreachable!("main prints usage when no subcommand is given"),
    }
}
