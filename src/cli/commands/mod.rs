//! Command implementations for the CST export CLI
//!
//! Each command is implemented in its own module. Shared setup (logging and
//! layered configuration) lives in [`shared`].

pub mod inspect;
pub mod shared;

pub use inspect::InspectStats;

use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the handler of the given subcommand.
pub fn run(command: Commands) -> anyhow::Result<InspectStats> {
    match command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
