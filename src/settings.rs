//! Integration setting descriptors.
//!
//! The chat platform sends configuration as an ordered list of setting
//! descriptors rather than a map; every lookup scans that list. The
//! single [`lookup`] helper here is the only place that scan lives.

use serde::Deserialize;
use serde_json::Value;

/// One setting descriptor from the integration payload. `default` carries
/// the configured value; the platform reuses the field name for both the
/// declared default and the user's choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Setting {
    pub label: String,
    #[serde(rename = "type")]
    pub setting_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub default: Value,
    pub required: bool,
}

/// First setting whose label matches, in list order. Labels are assumed
/// unique; duplicates resolve to the earliest entry.
pub fn lookup<'a>(settings: &'a [Setting], label: &str) -> Option<&'a Value> {
    settings
        .iter()
        .find(|s| s.label == label)
        .map(|s| &s.default)
}

/// Truthiness of a JSON settings value: null, false, 0, empty string,
/// empty array, and empty object are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
