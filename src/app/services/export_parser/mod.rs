//! Parser for CST simulation text exports
//!
//! A CST export stores one block per simulation run. Each block starts with the
//! `#Parameters = ` delimiter, carries its parameter annotation on that same line,
//! then two more header lines, then whitespace-separated numeric rows:
//!
//! ```text
//! #Parameters = {freq=2.5; width=0.8}
//! #"Frequency / GHz"	"S1,1 [Magnitude]"
//! #----------------------------------------
//! 1.0	0.51
//! 1.5	0.47
//! ```
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`loader`] - File reading and block splitting
//! - [`parameter`] - Scalar parameter extraction from the block annotation
//! - [`header`] - Column label extraction from the header lines
//! - [`table`] - Tabular rows to `ndarray` conversion
//! - [`parser`] - Orchestration over all blocks of a file
//! - [`stats`] - Parsing statistics
//!
//! ## Usage
//!
//! ```no_run
//! use cst_export::app::services::export_parser::ExportParser;
//!
//! # fn example() -> cst_export::Result<()> {
//! let export = ExportParser::default().parse_file(std::path::Path::new("sweep.txt"))?;
//!
//! println!("Parsed {} blocks with {} rows",
//!          export.stats.total_blocks,
//!          export.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod loader;
pub mod parameter;
pub mod parser;
pub mod stats;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::column_labels;
pub use loader::{load_data_blocks, split_blocks};
pub use parameter::identify_parameter_value;
pub use parser::ExportParser;
pub use stats::ParseStats;
pub use table::{data_block_to_array, data_block_to_array_with};
