//! Truthiness for JSON values.
//!
//! The boolean-context rule behind [`State::fetch_or`](super::State::fetch_or):
//! null and `false` are falsy, numbers are falsy at zero, and strings, arrays,
//! and objects are falsy when empty.

use serde_json::Value;

/// Check whether a value counts as "present" in a fallback expression.
///
/// This is a pure predicate with no side effects, exhaustive over the JSON
/// value types.
///
/// # Example
///
/// ```rust
/// use flowstate::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("water")));
/// assert!(is_truthy(&json!([1, 2, 3])));
///
/// assert!(!is_truthy(&json!(null)));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                integer != 0
            } else if let Some(unsigned) = number.as_u64() {
                unsigned != 0
            } else {
                number.as_f64().map(|float| float != 0.0).unwrap_or(true)
            }
        }
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
