//! Core export parser implementation
//!
//! This module provides the parser orchestration: file reading, block splitting,
//! and the two passes over the blocks that build the parameter vector and the
//! array list.

use ndarray::Array1;
use std::path::Path;
use tracing::{debug, info, warn};

use super::header::column_labels;
use super::loader::{read_export, split_blocks};
use super::parameter::identify_parameter_value;
use super::stats::ParseStats;
use super::table::parse_table;
use crate::app::models::{BlockMetadata, ParameterSet, ParsedExport};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser for CST simulation text exports
///
/// The first failing block aborts the parse; there are no partial results.
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Create a new parser with a validated configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a CST export file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParsedExport> {
        info!("Parsing CST export: {}", file_path.display());

        let content = read_export(file_path)?;
        let export = self.parse_str(&content)?;

        info!(
            "Parsed {} blocks with {} rows from {}",
            export.stats.total_blocks,
            export.stats.total_rows,
            file_path.display()
        );
        Ok(export)
    }

    /// Parse CST export content already held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParsedExport> {
        let blocks = split_blocks(content, &self.config.delimiter);
        if blocks.is_empty() {
            warn!("No '{}' blocks found in export", self.config.delimiter.trim());
        }

        let parameters = self.extract_parameters(&blocks)?;

        let mut stats = ParseStats::new();
        let mut arrays = Vec::with_capacity(blocks.len());
        let mut metadata = Vec::with_capacity(blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            let table =
                parse_table(block, &self.config).map_err(|e| Error::in_block(index, e))?;
            debug!(
                "Block {}: {} rows x {} columns",
                index, table.rows, table.cols
            );
            stats.record_table(&table);
            let table_shape = [table.rows, table.cols];

            let array = table
                .into_array(self.config.squeeze)
                .map_err(|e| Error::in_block(index, e))?;
            arrays.push(array);

            metadata.push(BlockMetadata {
                parameters: ParameterSet::parse(block),
                column_labels: column_labels(block, self.config.skip_rows),
                table_shape,
            });
        }

        Ok(ParsedExport {
            parameters,
            arrays,
            metadata,
            stats,
        })
    }

    /// First pass: one scalar per block, in block order
    fn extract_parameters(&self, blocks: &[&str]) -> Result<Array1<f64>> {
        let values = blocks
            .iter()
            .enumerate()
            .map(|(index, block)| {
                identify_parameter_value(block).map_err(|e| Error::in_block(index, e))
            })
            .collect::<Result<Vec<f64>>>()?;

        debug!("Extracted {} parameter values", values.len());
        Ok(Array1::from_vec(values))
    }
}
