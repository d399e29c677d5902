//! Tabular rows to `ndarray` conversion
//!
//! Skips the header lines of a block, drops comments and blank lines, and parses
//! every remaining token as `f64`. All rows must have the same column count.

use ndarray::{ArrayD, IxDyn};
use tracing::trace;

use crate::config::ParserConfig;
use crate::{Error, Result};

/// Convert a data block into an array using the default configuration
///
/// Skips the first three lines of the block. Returns a 2-D `(rows, cols)` array,
/// or a 1-D array when the table has a single row or a single column. A block
/// with no data rows gives an empty array.
pub fn data_block_to_array(block: &str) -> Result<ArrayD<f64>> {
    data_block_to_array_with(block, &ParserConfig::default())
}

/// Convert a data block into an array
///
/// Line numbers in errors count from 1 at the first line of the block.
pub fn data_block_to_array_with(block: &str, config: &ParserConfig) -> Result<ArrayD<f64>> {
    parse_table(block, config)?.into_array(config.squeeze)
}

/// Numeric rows of one block in row-major order
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Table {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>,
}

impl Table {
    /// Shape the values as `(rows, cols)`, collapsing to 1-D when `squeeze` is set
    /// and the table has at most one row or exactly one column
    pub fn into_array(self, squeeze: bool) -> Result<ArrayD<f64>> {
        let shape = if squeeze && (self.rows <= 1 || self.cols == 1) {
            vec![self.rows * self.cols]
        } else {
            vec![self.rows, self.cols]
        };
        trace!("Converted block to array with shape {:?}", shape);

        Ok(ArrayD::from_shape_vec(IxDyn(&shape), self.values)?)
    }
}

/// Parse the numeric section of a block
pub(crate) fn parse_table(block: &str, config: &ParserConfig) -> Result<Table> {
    let mut lines = block.lines();
    for skipped in 0..config.skip_rows {
        if lines.next().is_none() {
            return Err(Error::HeaderUnderflow {
                required: config.skip_rows,
                found: skipped,
            });
        }
    }

    let mut values = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0;

    for (offset, raw) in lines.enumerate() {
        let line_no = config.skip_rows + offset + 1;
        let line = strip_comment(raw, config.comment_prefix.as_deref()).trim();
        if line.is_empty() {
            continue;
        }

        let row_start = values.len();
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|e| Error::invalid_number(line_no, token, e))?;
            values.push(value);
        }

        let found = values.len() - row_start;
        match columns {
            None => columns = Some(found),
            Some(expected) if expected != found => {
                return Err(Error::InconsistentColumns {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    if rows == 0 {
        trace!("Block has no data rows");
    }
    Ok(Table {
        rows,
        cols: columns.unwrap_or(0),
        values,
    })
}

fn strip_comment<'a>(line: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix.and_then(|p| line.find(p)) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
