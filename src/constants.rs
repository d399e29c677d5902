//! Application constants for the CST export parser
//!
//! This module contains the format literals, default values and environment
//! variable names used throughout the parser and the CLI.

// =============================================================================
// Export Format
// =============================================================================

/// Literal that starts every data block in a CST export
pub const BLOCK_DELIMITER: &str = "#Parameters = ";

/// Number of leading lines of a block that are not numeric data
///
/// The remainder of the `#Parameters = {...}` line, the column label line and the
/// separator line.
pub const HEADER_SKIP_ROWS: usize = 3;

/// Prefix that starts a comment inside the tabular section
pub const COMMENT_PREFIX: &str = "#";

/// Opening and closing characters of the parameter annotation
pub const ANNOTATION_OPEN: char = '{';
pub const ANNOTATION_CLOSE: char = '}';

/// Separator between the name and value of one annotation entry
pub const ANNOTATION_ASSIGN: char = '=';

/// Separator between annotation entries
pub const ANNOTATION_SEPARATOR: char = ';';

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "cst_export";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overrides
pub mod env_vars {
    pub const DELIMITER: &str = "CST_EXPORT_DELIMITER";
    pub const SKIP_ROWS: &str = "CST_EXPORT_SKIP_ROWS";
    pub const COMMENT_PREFIX: &str = "CST_EXPORT_COMMENT_PREFIX";
    pub const SQUEEZE: &str = "CST_EXPORT_SQUEEZE";
}

// =============================================================================
// Logging
// =============================================================================

/// Target used in the default tracing filter
pub const LOG_TARGET: &str = "cst_export";
