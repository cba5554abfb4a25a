//! Canonical string form of scalar values.
//!
//! The host tool stores `resource_configuration` as a map of strings, so every
//! leaf of an API response ends up rendered through [`conv_to_string`]:
//!
//! | Value                  | Rendering                              |
//! |------------------------|----------------------------------------|
//! | string                 | unchanged                              |
//! | integer (i64 / u64)    | base-10 text                           |
//! | floating-point number  | zero decimal digits (`3.0` -> `"3"`)   |
//! | bool                   | `"true"` / `"false"`                   |
//! | null, sequence, map    | `""`                                   |
//!
//! Floats lose their fraction. The API returns whole numbers for the values we
//! care about (CPU, memory, storage) and the provider has always rendered them
//! this way, so existing state files depend on it.

use serde_json::Value;

use crate::core::VracfgError;

/// Render a scalar as a string. Unsupported kinds yield an empty string.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vracfg::conv_to_string;
///
/// assert_eq!(conv_to_string(&json!(3.0)), "3");
/// assert_eq!(conv_to_string(&json!(true)), "true");
/// assert_eq!(conv_to_string(&json!({"a": 1})), "");
/// ```
#[must_use]
pub fn conv_to_string(value: &Value) -> String {
    scalar_string(value).unwrap_or_default()
}

/// Render a scalar as a string, failing on kinds that have no string form.
///
/// `path` is only used for the error message.
pub fn try_conv_to_string(value: &Value, path: &str) -> Result<String, VracfgError> {
    scalar_string(value).ok_or_else(|| VracfgError::UnsupportedValue {
        path: path.to_string(),
        kind: value_kind(value),
    })
}

/// Name of the kind of a value, for diagnostics.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| format!("{f:.0}"))
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
