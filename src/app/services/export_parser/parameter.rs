//! Scalar parameter extraction from the block annotation
//!
//! The swept value of a run is the first entry of the `{name=value;...}`
//! annotation on the block's first line.

use crate::app::models::annotation;
use crate::constants::{ANNOTATION_ASSIGN, ANNOTATION_SEPARATOR};
use crate::{Error, Result};

/// Extract the parameter value from a data block
///
/// Takes the text between the first `{` and the first `}`, keeps what follows
/// the first `=` (all of it when there is none), cuts it at the first `;` and
/// parses the rest as `f64`.
pub fn identify_parameter_value(block: &str) -> Result<f64> {
    let inner = annotation(block).ok_or(Error::ParameterNotFound)?;

    let value = match inner.find(ANNOTATION_ASSIGN) {
        Some(pos) => &inner[pos + ANNOTATION_ASSIGN.len_utf8()..],
        None => inner,
    };

    let value = match value.find(ANNOTATION_SEPARATOR) {
        Some(pos) => &value[..pos],
        None => value,
    };

    let value = value.trim();
    value
        .parse::<f64>()
        .map_err(|e| Error::invalid_parameter(value, e))
}
