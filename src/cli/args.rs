//! Command-line argument definitions for the CST export inspector
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// CLI arguments for the CST export inspector
///
/// Reads CST simulation text exports and reports the parameter sweep and the
/// shape of every data block.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cst_export",
    version,
    about = "Inspect CST simulation text exports",
    long_about = "Parses CST simulation text exports (one '#Parameters = {...}' block per run) \
                  into a parameter vector and one numeric array per block, and reports what \
                  was found. Nothing is written to disk."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse exports and summarize their blocks
    Inspect(InspectArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Export files or glob patterns
    ///
    /// A pattern that matches nothing is treated as a literal path, so a missing
    /// file is reported as a read error.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Include the numeric rows of every block in the output
    #[arg(long = "show-data", help = "Print the numeric rows of every block")]
    pub show_data: bool,

    /// Literal that starts every data block
    #[arg(
        long = "delimiter",
        value_name = "TEXT",
        help = "Block delimiter (default: '#Parameters = ')"
    )]
    pub delimiter: Option<String>,

    /// Header lines skipped at the start of every block
    #[arg(
        long = "skip-rows",
        value_name = "N",
        help = "Header lines to skip in each block (default: 3)"
    )]
    pub skip_rows: Option<usize>,

    /// Keep single-row and single-column tables two-dimensional
    #[arg(long = "no-squeeze", help = "Always report 2-D array shapes")]
    pub no_squeeze: bool,

    /// Path to a JSON parser configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Parser configuration file (JSON)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON report for scripting
    Json,
}

impl InspectArgs {
    /// Get log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Expand file arguments into paths, in argument order
    pub fn expand_files(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for pattern in &self.files {
            let entries =
                glob::glob(pattern).map_err(|e| Error::invalid_pattern(pattern.clone(), e))?;

            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        matched = true;
                        paths.push(path);
                    }
                    Err(e) => warn!("Skipping unreadable path {}: {}", e.path().display(), e),
                }
            }

            if !matched {
                paths.push(PathBuf::from(pattern));
            }
        }

        Ok(paths)
    }
}
