//! File reading and block splitting
//!
//! An export is read into memory in one go and cut on the block delimiter.
//! Whatever precedes the first delimiter is not a block and is dropped.

use std::path::Path;
use tracing::debug;

use crate::constants::BLOCK_DELIMITER;
use crate::{Error, Result};

/// Read a CST export and split it into data blocks on `#Parameters = `
pub fn load_data_blocks(path: impl AsRef<Path>) -> Result<Vec<String>> {
    load_data_blocks_with(path.as_ref(), BLOCK_DELIMITER)
}

/// Read a CST export and split it into data blocks on a custom delimiter
pub fn load_data_blocks_with(path: &Path, delimiter: &str) -> Result<Vec<String>> {
    let content = read_export(path)?;
    Ok(split_blocks(&content, delimiter)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Split export content into blocks, dropping the text before the first delimiter
///
/// Each block starts right after its delimiter and runs up to the next one.
pub fn split_blocks<'a>(content: &'a str, delimiter: &str) -> Vec<&'a str> {
    let blocks: Vec<&str> = content.split(delimiter).skip(1).collect();
    debug!("Split export into {} blocks", blocks.len());
    blocks
}

/// Read the whole export file into memory
pub(crate) fn read_export(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))
}
