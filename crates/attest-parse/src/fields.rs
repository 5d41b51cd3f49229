//! Tolerant field accessors for raw Oracle records
//!
//! These read individual fields out of `serde_json::Value` objects without
//! trusting the shape: a wrong type reads as absent, and the caller decides
//! whether absence degrades the field or drops the record.

use serde_json::Value;

/// Read a non-empty string field.
pub fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read an id-like field, accepting either a string or a bare number
/// (Oracles emit `"id": 3` about as often as `"id": "3"`).
pub fn id_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Read an unsigned integer field, accepting a numeric string as well.
pub fn u64_field(value: &Value, key: &str) -> Option<u64> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a float field clamped to [0, 1], falling back to `default` when
/// the field is missing or not numeric.
pub fn f64_field_clamped(value: &Value, key: &str, default: f64) -> f64 {
    value
        .get(key)
        .and_then(|v| v.as_f64())
        .unwrap_or(default)
        .clamp(0.0, 1.0)
}

/// Read a list of strings, skipping non-string elements. A missing or
/// non-array field reads as empty.
pub fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
