//! Column label extraction from block header lines
//!
//! CST writes the column names of a block as double-quoted strings on the
//! line after the annotation, e.g. `#"Frequency / GHz"	"S1,1 [Magnitude]"`.

use regex::Regex;
use std::sync::OnceLock;

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("valid label regex"))
}

/// Quoted column names from the first `skip_rows` lines of a block
///
/// Uses the first header line that holds any quoted name. Returns an empty list
/// when no header line does.
pub fn column_labels(block: &str, skip_rows: usize) -> Vec<String> {
    block
        .lines()
        .take(skip_rows)
        .map(|line| {
            label_pattern()
                .captures_iter(line)
                .map(|cap| cap[1].trim().to_string())
                .collect::<Vec<_>>()
        })
        .find(|labels| !labels.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_from_second_line() {
        let block = "{freq=2.5}\n#\"Frequency / GHz\"\t\"S1,1 [Magnitude]\"\n#-----\n1 2\n";
        assert_eq!(
            column_labels(block, 3),
            vec!["Frequency / GHz".to_string(), "S1,1 [Magnitude]".to_string()]
        );
    }

    #[test]
    fn test_labels_ignore_data_rows() {
        let block = "{a=1}\n#\n#\n\"not\" \"header\"\n";
        assert!(column_labels(block, 3).is_empty());
    }

    #[test]
    fn test_labels_absent() {
        assert!(column_labels("{a=1}\nx y\n--\n1 2\n", 3).is_empty());
    }
}
