//! State construction errors.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when constructing a state.
#[derive(Debug, Error)]
pub enum StateError {
    /// A JSON value other than an object was offered as a state source
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Name a JSON value's type for error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
