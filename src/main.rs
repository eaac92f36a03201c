use clap::Parser;
use cor_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show a short usage overview
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Per-file failures were already reported via the log and the
            // printed summary; normal operation always exits 0
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("cor-processor - GPR positioning log correction");
    println!("==============================================");
    println!();
    println!("Correct GPR .cor positioning logs: reproject GPS coordinates into a");
    println!("target CRS and replace GPS elevations with values sampled from a");
    println!("reference lidar DEM.");
    println!();
    println!("USAGE:");
    println!("    cor-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Correct .cor files against a DEM (main command)");
    println!("    inspect     Parse .cor files and report contents, no output written");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Correct every .cor file in a survey directory:");
    println!("    cor-processor process surveys/2023_site4/ --dem lidar_dem.tif -o corrected/");
    println!();
    println!("    # Correct specific files into a different CRS:");
    println!("    cor-processor process line_01.cor line_02.cor --dem dem.tif \\");
    println!("                            -o corrected/ --target-epsg 25835");
    println!();
    println!("    # Check files parse before a field upload:");
    println!("    cor-processor inspect surveys/2023_site4/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cor-processor <COMMAND> --help");
}
