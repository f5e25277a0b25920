//! Validation helpers for untyped input.
//!
//! Every dynamic construction and mutation site funnels through these
//! functions, so a value is checked before anything is stored.

use crate::core::error::{DomainError, Field};
use serde_json::Value;

/// Name of the JSON kind of a value, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Human-readable rendering of an arbitrary value.
///
/// Strings are shown bare, everything else as compact JSON.
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Require `value` to be a string, returning an owned copy
pub fn require_string(field: Field, value: &Value) -> Result<String, DomainError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DomainError::InvalidType {
            field,
            found: value_kind(other),
        }),
    }
}
