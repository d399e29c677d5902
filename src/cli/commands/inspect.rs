//! Inspect command implementation for the CST export CLI
//!
//! Parses every requested export and prints a per-block summary, either as
//! human-readable text or as a JSON report.

use super::shared::{load_configuration, setup_logging};
use crate::app::models::{BlockView, ParameterSet, ParsedExport};
use crate::app::services::export_parser::{ExportParser, ParseStats};
use crate::cli::args::{InspectArgs, OutputFormat};
use anyhow::Context;
use colored::Colorize;
use ndarray::ArrayD;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Totals reported back to `main`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectStats {
    /// Number of export files parsed
    pub files_inspected: usize,
    /// Number of blocks across all files
    pub blocks_parsed: usize,
}

/// JSON report for one export file
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub path: String,
    pub parameter_name: Option<&'a str>,
    pub stats: &'a ParseStats,
    pub blocks: Vec<BlockReport<'a>>,
}

/// JSON report for one block
#[derive(Debug, Serialize)]
pub struct BlockReport<'a> {
    pub index: usize,
    pub parameter: f64,
    pub shape: &'a [usize],
    pub parameters: &'a ParameterSet,
    pub column_labels: &'a [String],
    pub table_shape: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<f64>>>,
}

impl<'a> FileReport<'a> {
    pub fn new(path: &Path, export: &'a ParsedExport, show_data: bool) -> Self {
        Self {
            path: path.display().to_string(),
            parameter_name: export.parameter_name(),
            stats: &export.stats,
            blocks: export
                .blocks()
                .map(|block| BlockReport::new(block, show_data))
                .collect(),
        }
    }
}

impl<'a> BlockReport<'a> {
    fn new(block: BlockView<'a>, show_data: bool) -> Self {
        Self {
            index: block.index,
            parameter: block.parameter,
            shape: block.array.shape(),
            parameters: &block.metadata.parameters,
            column_labels: &block.metadata.column_labels,
            table_shape: block.metadata.table_shape,
            data: show_data.then(|| array_rows(block.array, block.metadata.table_shape)),
        }
    }
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> anyhow::Result<InspectStats> {
    setup_logging(&args)?;
    debug!("Inspect arguments: {:?}", args);

    let config = load_configuration(&args).context("loading parser configuration")?;
    let parser = ExportParser::new(config)?;
    let paths = args.expand_files()?;
    info!("Inspecting {} export files", paths.len());

    let mut stats = InspectStats::default();
    let mut exports = Vec::with_capacity(paths.len());

    for path in &paths {
        let export = parser
            .parse_file(path)
            .with_context(|| format!("parsing {}", path.display()))?;
        stats.files_inspected += 1;
        stats.blocks_parsed += export.len();
        exports.push(export);
    }

    match args.format {
        OutputFormat::Text => {
            for (path, export) in paths.iter().zip(&exports) {
                print_text_summary(path, export, args.show_data);
            }
        }
        OutputFormat::Json => {
            let reports: Vec<FileReport<'_>> = paths
                .iter()
                .zip(&exports)
                .map(|(path, export)| FileReport::new(path, export, args.show_data))
                .collect();
            let json =
                serde_json::to_string_pretty(&reports).context("serializing JSON report")?;
            println!("{json}");
        }
    }

    Ok(stats)
}

fn print_text_summary(path: &Path, export: &ParsedExport, show_data: bool) {
    println!("{}", path.display().to_string().bold());
    println!(
        "  {} blocks, {} rows ({:.1} per block), {} values",
        export.stats.total_blocks,
        export.stats.total_rows,
        export.stats.mean_rows_per_block(),
        export.stats.total_values
    );

    let name = export.parameter_name().unwrap_or("parameter");
    for block in export.blocks() {
        let shape = block
            .array
            .shape()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("x");

        print!(
            "  {} {} = {}  shape {}",
            format!("[{}]", block.index).cyan(),
            name,
            block.parameter,
            shape
        );
        if !block.metadata.column_labels.is_empty() {
            print!("  columns: {}", block.metadata.column_labels.join(", ").dimmed());
        }
        println!();

        if show_data {
            for row in array_rows(block.array, block.metadata.table_shape) {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("      {}", cells.join("\t"));
            }
        }
    }
}

/// Rows of a block array, rebuilt from the table shape recorded before squeezing
fn array_rows(array: &ArrayD<f64>, [rows, cols]: [usize; 2]) -> Vec<Vec<f64>> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let values: Vec<f64> = array.iter().copied().collect();
    values.chunks(cols).map(<[f64]>::to_vec).collect()
}
