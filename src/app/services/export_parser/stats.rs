//! Parsing statistics for CST export processing

use serde::{Deserialize, Serialize};

use super::table::Table;

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of data blocks parsed
    pub total_blocks: usize,

    /// Number of numeric rows across all blocks
    pub total_rows: usize,

    /// Number of numeric values across all blocks
    pub total_values: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_table(&mut self, table: &Table) {
        self.total_blocks += 1;
        self.total_rows += table.rows;
        self.total_values += table.values.len();
    }

    /// Average number of rows per block
    pub fn mean_rows_per_block(&self) -> f64 {
        if self.total_blocks == 0 {
            0.0
        } else {
            self.total_rows as f64 / self.total_blocks as f64
        }
    }
}
