use clap::Parser;
use cst_export::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - results have already been printed by the command
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
    println!("CST Export Inspector");
    println!("====================");
    println!();
    println!("Parse CST simulation text exports into a parameter vector and one");
    println!("numeric array per '#Parameters = {{...}}' block.");
    println!();
    println!("USAGE:");
    println!("    cst_export <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Parse exports and summarize their blocks");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize a parameter sweep:");
    println!("    cst_export inspect sweep.txt");
    println!();
    println!("    # JSON report with data rows for every export in a directory:");
    println!("    cst_export inspect 'results/*.txt' --format json --show-data");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cst_export <COMMAND> --help");
}
