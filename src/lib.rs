//! CST Export Library
//!
//! A Rust library for reading CST simulation text exports (parameter sweeps
//! written as a sequence of `#Parameters = {...}` blocks) into numeric arrays.
//!
//! This library provides tools for:
//! - Splitting an export file into its data blocks
//! - Extracting the swept parameter value from each block's header annotation
//! - Parsing each block's tabular rows into an `ndarray` array
//! - Layered parser configuration (defaults, config file, environment, CLI)
//!
//! ```no_run
//! let (parameters, arrays) = cst_export::cst_to_arrays("sweep.txt")?;
//! assert_eq!(parameters.len(), arrays.len());
//! # Ok::<(), cst_export::Error>(())
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use std::num::ParseFloatError;
use std::path::Path;

use ndarray::{Array1, ArrayD};

// Re-export commonly used types
pub use app::models::{BlockMetadata, ParameterSet, ParsedExport};
pub use app::services::export_parser::{
    ExportParser, ParseStats, data_block_to_array, identify_parameter_value, load_data_blocks,
    split_blocks,
};
pub use config::ParserConfig;

/// Result type alias for the CST export parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CST export parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Block header has no `{...}` annotation
    #[error("Could not find parameter value in data block")]
    ParameterNotFound,

    /// Annotation value is not a number
    #[error("Invalid parameter value '{value}'")]
    InvalidParameter {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Tabular data contains a token that is not a number
    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// Rows of one block disagree on their column count
    #[error("Inconsistent column count on line {line}: expected {expected}, found {found}")]
    InconsistentColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Block is shorter than the header lines it must skip
    #[error("Block has {found} lines but {required} header lines are required")]
    HeaderUnderflow { required: usize, found: usize },

    /// Parsed values do not fit the computed array shape
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Error raised while processing a specific block
    #[error("Block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Glob pattern could not be compiled
    #[error("Invalid file pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(value: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidParameter {
            value: value.into(),
            source,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(line: usize, token: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidNumber {
            line,
            token: token.into(),
            source,
        }
    }

    /// Wrap an error with the index of the block it came from
    pub fn in_block(index: usize, source: Error) -> Self {
        Self::Block {
            index,
            source: Box::new(source),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// The innermost error, looking through block wrappers
    pub fn root(&self) -> &Error {
        match self {
            Self::Block { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Convert a CST export file into its parameter vector and data arrays
///
/// Uses the default [`ParserConfig`]. Element `i` of the parameter vector belongs
/// to element `i` of the array list.
pub fn cst_to_arrays(path: impl AsRef<Path>) -> Result<(Array1<f64>, Vec<ArrayD<f64>>)> {
    let export = ExportParser::default().parse_file(path.as_ref())?;
    Ok((export.parameters, export.arrays))
}
