//! Core data models for parsed CST exports
//!
//! This module contains the result types produced by the export parser: the
//! full annotation of a block, per-block metadata and the aggregated export.

use ndarray::{Array1, ArrayD};
use serde::{Serialize, Serializer};

use crate::app::services::export_parser::ParseStats;
use crate::constants::{ANNOTATION_ASSIGN, ANNOTATION_SEPARATOR};

// =============================================================================
// ParameterSet
// =============================================================================

/// All `name=value` entries of a block's `{...}` annotation, in file order
///
/// Values stay as text. CST writes every swept and fixed parameter of the run
/// into the annotation, e.g. `{freq=2.5; width=0.8}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Parse the annotation of a data block
    ///
    /// Never fails. A block without an annotation yields an empty set, and
    /// entries without `=` are ignored.
    pub fn parse(block: &str) -> Self {
        let Some(inner) = annotation(block) else {
            return Self::default();
        };

        let entries = inner
            .split(ANNOTATION_SEPARATOR)
            .filter_map(|entry| entry.split_once(ANNOTATION_ASSIGN))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        Self { entries }
    }

    /// Raw text value for a parameter name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric value for a parameter name, if present and numeric
    pub fn value_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.parse::<f64>().ok())
    }

    /// Parameter names in annotation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, value)` pairs in annotation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParameterSet {
    /// Serialized as a map in annotation order
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Text between the first `{` and the first `}` of a block
///
/// `None` when either brace is missing. A `}` before the `{` gives an empty
/// annotation.
pub(crate) fn annotation(block: &str) -> Option<&str> {
    use crate::constants::{ANNOTATION_CLOSE, ANNOTATION_OPEN};

    let start = block.find(ANNOTATION_OPEN)?;
    let end = block.find(ANNOTATION_CLOSE)?;
    if end > start {
        Some(&block[start + ANNOTATION_OPEN.len_utf8()..end])
    } else {
        Some("")
    }
}

// =============================================================================
// BlockMetadata
// =============================================================================

/// Header information of one data block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockMetadata {
    /// Complete parameter annotation
    pub parameters: ParameterSet,

    /// Quoted column names from the header lines (empty when absent)
    pub column_labels: Vec<String>,

    /// `[rows, cols]` of the numeric table before any squeeze
    pub table_shape: [usize; 2],
}

// =============================================================================
// ParsedExport
// =============================================================================

/// A fully parsed CST export
///
/// `parameters[i]`, `arrays[i]` and `metadata[i]` all describe block `i`.
#[derive(Debug, Clone)]
pub struct ParsedExport {
    /// One scalar per block, taken from the first annotation entry
    pub parameters: Array1<f64>,

    /// One numeric table per block
    pub arrays: Vec<ArrayD<f64>>,

    /// Header information per block
    pub metadata: Vec<BlockMetadata>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Borrowed view of one block of a [`ParsedExport`]
#[derive(Debug, Clone, Copy)]
pub struct BlockView<'a> {
    pub index: usize,
    pub parameter: f64,
    pub array: &'a ArrayD<f64>,
    pub metadata: &'a BlockMetadata,
}

impl ParsedExport {
    /// Number of blocks
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether the export contained no blocks
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// View of block `index`
    pub fn block(&self, index: usize) -> Option<BlockView<'_>> {
        Some(BlockView {
            index,
            parameter: *self.parameters.get(index)?,
            array: self.arrays.get(index)?,
            metadata: self.metadata.get(index)?,
        })
    }

    /// Iterate over all blocks in file order
    pub fn blocks(&self) -> impl Iterator<Item = BlockView<'_>> {
        (0..self.len()).filter_map(|i| self.block(i))
    }

    /// Name of the swept parameter (first annotation entry of the first block)
    pub fn parameter_name(&self) -> Option<&str> {
        self.metadata.first()?.parameters.names().next()
    }
}
