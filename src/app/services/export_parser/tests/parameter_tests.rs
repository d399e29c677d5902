//! Tests for parameter value extraction

use super::super::parameter::identify_parameter_value;
use crate::Error;

#[test]
fn test_value_with_trailing_separator() {
    assert_eq!(identify_parameter_value("{freq=2.5;}").unwrap(), 2.5);
}

#[test]
fn test_single_integer_value() {
    assert_eq!(identify_parameter_value("{x=10}").unwrap(), 10.0);
}

#[test]
fn test_first_entry_wins() {
    let block = "{freq=3.5; width=0.8}\n#\"Frequency / GHz\"\n#---\n1 2\n";
    assert_eq!(identify_parameter_value(block).unwrap(), 3.5);
}

#[test]
fn test_whitespace_around_value() {
    assert_eq!(identify_parameter_value("{ a = -1.25e-3 ; b=2}").unwrap(), -1.25e-3);
}

#[test]
fn test_annotation_without_assignment() {
    // The whole annotation is the value
    assert_eq!(identify_parameter_value("{42}").unwrap(), 42.0);
}

#[test]
fn test_missing_braces() {
    assert!(matches!(
        identify_parameter_value("freq=2.5}"),
        Err(Error::ParameterNotFound)
    ));
    assert!(matches!(
        identify_parameter_value("{freq=2.5"),
        Err(Error::ParameterNotFound)
    ));
    assert!(matches!(
        identify_parameter_value(""),
        Err(Error::ParameterNotFound)
    ));
}

#[test]
fn test_non_numeric_value() {
    match identify_parameter_value("{x=abc}") {
        Err(Error::InvalidParameter { value, .. }) => assert_eq!(value, "abc"),
        other => panic!("expected invalid parameter, got {:?}", other),
    }
}

#[test]
fn test_closing_brace_before_opening() {
    match identify_parameter_value("} {x=1") {
        Err(Error::InvalidParameter { value, .. }) => assert!(value.is_empty()),
        other => panic!("expected invalid parameter, got {:?}", other),
    }
}
