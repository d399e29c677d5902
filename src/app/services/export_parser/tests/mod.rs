//! Test utilities for export parser testing
//!
//! This module provides sample exports and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod parameter_tests;
mod parser_tests;

/// Helper to create a three-block S-parameter sweep export
pub fn create_test_export() -> String {
    r#"#Parameters = {freq=2.5; width=0.8}
#"Frequency / GHz"	"S1,1 [Magnitude]"	"S2,1 [Magnitude]"
#-----------------------------------------------------------------
1.0	0.51	0.12
1.5	0.47	0.18

#Parameters = {freq=3; width=0.8}
#"Frequency / GHz"	"S1,1 [Magnitude]"	"S2,1 [Magnitude]"
#-----------------------------------------------------------------
1.0	0.55	0.10
1.5	0.49	0.16

#Parameters = {freq=3.5; width=0.8}
#"Frequency / GHz"	"S1,1 [Magnitude]"	"S2,1 [Magnitude]"
#-----------------------------------------------------------------
1.0	0.58	0.09
1.5	0.52	0.14
"#
    .to_string()
}

/// Helper to create a single block with the given annotation and rows
pub fn create_block(annotation: &str, rows: &[&str]) -> String {
    let mut block = format!("{annotation}\n#\"x\"\t\"y\"\n#----------\n");
    for row in rows {
        block.push_str(row);
        block.push('\n');
    }
    block
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
