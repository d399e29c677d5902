//! Configuration management and validation.
//!
//! Provides the parser configuration and its layered loading:
//! defaults, then an optional JSON config file, then environment variables.
//! CLI flags are applied last by the command layer.

use crate::constants::{
    BLOCK_DELIMITER, COMMENT_PREFIX, CONFIG_DIR_NAME, CONFIG_FILE_NAME, HEADER_SKIP_ROWS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings that control how an export is split and parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Literal that precedes every data block
    pub delimiter: String,

    /// Leading lines of each block skipped before numeric data
    pub skip_rows: usize,

    /// Comment marker in the tabular section (`None` disables comment stripping)
    pub comment_prefix: Option<String>,

    /// Collapse single-row or single-column tables to 1-D arrays
    pub squeeze: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: BLOCK_DELIMITER.to_string(),
            skip_rows: HEADER_SKIP_ROWS,
            comment_prefix: Some(COMMENT_PREFIX.to_string()),
            squeeze: true,
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom block delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Create configuration with a custom header skip count
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Create configuration with a custom comment prefix
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Create configuration that keeps `#` and similar text in data rows
    pub fn without_comments(mut self) -> Self {
        self.comment_prefix = None;
        self
    }

    /// Create configuration that always returns 2-D arrays
    pub fn without_squeeze(mut self) -> Self {
        self.squeeze = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::configuration("Block delimiter must not be empty"));
        }
        if matches!(&self.comment_prefix, Some(prefix) if prefix.is_empty()) {
            return Err(Error::configuration(
                "Comment prefix must not be empty (omit it to disable comments)",
            ));
        }
        Ok(())
    }

    /// Default config file location (`<config_dir>/cst_export/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine config directory"))
    }

    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    ///
    /// An explicit `config_file` must exist. Without one, the default location is
    /// used only when a file is present there.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let default_path = Self::default_config_path().ok();
        let file = match config_file {
            Some(path) => Some(path),
            None => default_path.as_deref().filter(|path| path.exists()),
        };

        let mut config = match file {
            Some(path) => {
                debug!("Loading parser config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CST_EXPORT_*` overrides read through `lookup`
    ///
    /// An empty `CST_EXPORT_COMMENT_PREFIX` disables comment stripping.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(delimiter) = lookup(env_vars::DELIMITER) {
            self.delimiter = delimiter;
        }

        if let Some(skip_rows) = lookup(env_vars::SKIP_ROWS) {
            self.skip_rows = skip_rows.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    env_vars::SKIP_ROWS,
                    skip_rows
                ))
            })?;
        }

        if let Some(prefix) = lookup(env_vars::COMMENT_PREFIX) {
            self.comment_prefix = if prefix.is_empty() { None } else { Some(prefix) };
        }

        if let Some(squeeze) = lookup(env_vars::SQUEEZE) {
            self.squeeze = parse_bool(&squeeze).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true or false, got '{}'",
                    env_vars::SQUEEZE,
                    squeeze
                ))
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
