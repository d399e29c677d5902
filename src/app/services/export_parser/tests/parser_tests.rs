//! Tests for the export parser orchestration

use super::*;
use crate::Error;
use crate::app::services::export_parser::{ExportParser, load_data_blocks, split_blocks};
use crate::config::ParserConfig;
use crate::constants::BLOCK_DELIMITER;
use ndarray::arr1;

#[test]
fn test_blocks_parameters_and_arrays_align() {
    let export = ExportParser::default()
        .parse_str(&create_test_export())
        .unwrap();

    assert_eq!(export.len(), 3);
    assert_eq!(export.parameters, arr1(&[2.5, 3.0, 3.5]));
    assert_eq!(export.arrays.len(), 3);
    assert_eq!(export.metadata.len(), 3);

    for array in &export.arrays {
        assert_eq!(array.shape(), &[2, 3]);
    }
    assert_eq!(export.arrays[1][[0, 1]], 0.55);
    assert_eq!(export.arrays[2][[1, 2]], 0.14);
}

#[test]
fn test_metadata_and_stats() {
    let export = ExportParser::default()
        .parse_str(&create_test_export())
        .unwrap();

    assert_eq!(export.parameter_name(), Some("freq"));
    let first = export.block(0).unwrap();
    assert_eq!(first.parameter, 2.5);
    assert_eq!(first.metadata.parameters.value_f64("width"), Some(0.8));
    assert_eq!(
        first.metadata.column_labels,
        vec!["Frequency / GHz", "S1,1 [Magnitude]", "S2,1 [Magnitude]"]
    );
    assert!(export.block(3).is_none());
    assert_eq!(export.blocks().count(), 3);

    assert_eq!(export.stats.total_blocks, 3);
    assert_eq!(export.stats.total_rows, 6);
    assert_eq!(export.stats.total_values, 18);
    assert_eq!(export.stats.mean_rows_per_block(), 2.0);
}

#[test]
fn test_parse_file_matches_parse_str() {
    let content = create_test_export();
    let temp_file = create_temp_file(&content);
    let parser = ExportParser::default();

    let from_file = parser.parse_file(temp_file.path()).unwrap();
    let from_str = parser.parse_str(&content).unwrap();

    assert_eq!(from_file.parameters, from_str.parameters);
    assert_eq!(from_file.arrays, from_str.arrays);
    assert_eq!(from_file.stats, from_str.stats);
}

#[test]
fn test_splitting_is_deterministic() {
    let temp_file = create_temp_file(&create_test_export());

    let first = load_data_blocks(temp_file.path()).unwrap();
    let second = load_data_blocks(temp_file.path()).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    let content = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(
        split_blocks(&content, BLOCK_DELIMITER),
        split_blocks(&content, BLOCK_DELIMITER)
    );
}

#[test]
fn test_empty_export() {
    let export = ExportParser::default()
        .parse_str("no blocks in here\n1 2 3\n")
        .unwrap();

    assert!(export.is_empty());
    assert_eq!(export.parameters.len(), 0);
    assert_eq!(export.parameter_name(), None);
}

#[test]
fn test_header_only_block_keeps_alignment() {
    let content = "#Parameters = {a=1}\n#\"x\"\n#---\n1 2\n#Parameters = {a=2}\n#\"x\"\n#---\n";

    let export = ExportParser::default().parse_str(content).unwrap();
    assert_eq!(export.parameters, arr1(&[1.0, 2.0]));
    assert_eq!(export.arrays.len(), 2);
    assert_eq!(export.arrays[0].shape(), &[2]);
    assert_eq!(export.arrays[1].shape(), &[0]);
    assert_eq!(export.metadata[1].table_shape, [0, 0]);
    assert_eq!(export.stats.total_rows, 1);
}

#[test]
fn test_table_shape_survives_squeeze() {
    let content = format!(
        "{BLOCK_DELIMITER}{}{BLOCK_DELIMITER}{}",
        create_block("{a=1}", &["1", "2", "3"]),
        create_block("{a=2}", &["4 5 6"])
    );

    let export = ExportParser::default().parse_str(&content).unwrap();
    assert_eq!(export.arrays[0].shape(), &[3]);
    assert_eq!(export.metadata[0].table_shape, [3, 1]);
    assert_eq!(export.arrays[1].shape(), &[3]);
    assert_eq!(export.metadata[1].table_shape, [1, 3]);
}

#[test]
fn test_bad_parameter_aborts_with_block_index() {
    let content = create_test_export().replacen("{freq=3;", "{freq=three;", 1);

    let err = ExportParser::default().parse_str(&content).unwrap_err();
    match &err {
        Error::Block { index, source } => {
            assert_eq!(*index, 1);
            assert!(matches!(**source, Error::InvalidParameter { .. }));
        }
        other => panic!("expected block error, got {:?}", other),
    }
}

#[test]
fn test_missing_annotation_aborts() {
    let content = format!(
        "{BLOCK_DELIMITER}{}{BLOCK_DELIMITER}{}",
        create_block("{a=1}", &["1 2"]),
        create_block("a=2", &["3 4"])
    );

    let err = ExportParser::default().parse_str(&content).unwrap_err();
    assert!(matches!(err.root(), Error::ParameterNotFound));
}

#[test]
fn test_parameters_checked_before_arrays() {
    // Block 0 has ragged rows, block 1 has no annotation: the parameter pass fails first
    let content = format!(
        "{BLOCK_DELIMITER}{}{BLOCK_DELIMITER}{}",
        create_block("{a=1}", &["1 2", "3"]),
        create_block("no annotation", &["3 4"])
    );

    let err = ExportParser::default().parse_str(&content).unwrap_err();
    assert!(matches!(err, Error::Block { index: 1, .. }));
    assert!(matches!(err.root(), Error::ParameterNotFound));
}

#[test]
fn test_ragged_block_aborts() {
    let content = format!(
        "{BLOCK_DELIMITER}{}",
        create_block("{a=1}", &["1 2", "3"])
    );

    let err = ExportParser::default().parse_str(&content).unwrap_err();
    assert!(matches!(err, Error::Block { index: 0, .. }));
    assert!(matches!(err.root(), Error::InconsistentColumns { .. }));
}

#[test]
fn test_custom_configuration() {
    let content = "@@ {t=0.5}\n1 2\n@@ {t=1.5}\n3 4\n";
    let config = ParserConfig::default()
        .with_delimiter("@@")
        .with_skip_rows(1)
        .without_squeeze();
    let parser = ExportParser::new(config).unwrap();

    let export = parser.parse_str(content).unwrap();
    assert_eq!(export.parameters, arr1(&[0.5, 1.5]));
    assert_eq!(export.arrays[0].shape(), &[1, 2]);
    assert!(export.metadata[0].column_labels.is_empty());
}

#[test]
fn test_invalid_configuration_rejected() {
    let config = ParserConfig::default().with_delimiter("");
    assert!(matches!(
        ExportParser::new(config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_missing_file() {
    let err = ExportParser::default()
        .parse_file(std::path::Path::new("/nonexistent/sweep.txt"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
