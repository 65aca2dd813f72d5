//! Helpers for walking parsed YAML.
//!
//! Source documents are read into [`serde_yaml::Value`] trees and walked by hand,
//! the same way stylesheets are, so every structural mismatch can name the
//! document section it was found in. `serde_yaml` mappings keep declaration
//! order, which the color table and inherited attributes depend on.

use serde_yaml::{Mapping, Value};

use crate::error::SchemeError;

/// Parses YAML text and requires the root to be a mapping.
pub(crate) fn parse_root(yaml: &str, context: &str) -> Result<Mapping, SchemeError> {
    let root: Value = serde_yaml::from_str(yaml)?;
    match root {
        Value::Mapping(map) => Ok(map),
        other => Err(SchemeError::malformed(
            context,
            format!("expected a mapping at the top level, got {}", kind(&other)),
        )),
    }
}

/// Converts a scalar node to its string form.
///
/// Strings are returned as-is; numbers and booleans use their YAML spelling so
/// that `font-type: {bold: 1}` and `font-type: {bold: "1"}` are equivalent.
pub(crate) fn scalar(value: &Value, context: &str) -> Result<String, SchemeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(SchemeError::malformed(
            context,
            format!("expected a scalar, got {}", kind(other)),
        )),
    }
}

/// Looks up `key` in `map` and requires it to be a mapping.
pub(crate) fn section<'a>(
    map: &'a Mapping,
    key: &str,
    context: &str,
) -> Result<&'a Mapping, SchemeError> {
    let value = map
        .get(key)
        .ok_or_else(|| SchemeError::malformed(context, format!("missing key '{}'", key)))?;
    value.as_mapping().ok_or_else(|| {
        SchemeError::malformed(
            context,
            format!("'{}' must be a mapping, got {}", key, kind(value)),
        )
    })
}

/// Reads a mapping of scalars into ordered `(key, value)` pairs.
pub(crate) fn scalar_pairs(
    map: &Mapping,
    context: &str,
) -> Result<Vec<(String, String)>, SchemeError> {
    map.iter()
        .map(|(key, value)| {
            let key = scalar(key, context)?;
            let value = scalar(value, &format!("{} '{}'", context, key))?;
            Ok((key, value))
        })
        .collect()
}

/// Short name for a node kind, used in error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
