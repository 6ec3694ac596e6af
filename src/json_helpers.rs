//! Helper functions for safe JSON access
//!
//! Lookups accept a list of candidate keys (camelCase first, snake_case
//! as a fallback) and never panic on unexpected types.

use serde_json::Value;

/// First value present under any of `keys`
pub fn get_any<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key)).filter(|v| !v.is_null())
}

/// Safely get an optional non-blank string value
pub fn get_str_opt<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a str> {
    get_any(obj, keys)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Safely get a string value with default
pub fn get_string_or(obj: &Value, keys: &[&str], default: &str) -> String {
    get_str_opt(obj, keys).unwrap_or(default).to_string()
}

/// Safely get an optional array value
pub fn get_array_opt<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    get_any(obj, keys).and_then(|v| v.as_array())
}

/// Numeric value, also accepting numeric strings ("82")
pub fn get_f64_opt(obj: &Value, keys: &[&str]) -> Option<f64> {
    get_any(obj, keys)
        .and_then(|v| v.as_f64().or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok())))
        .filter(|n| n.is_finite())
}

/// Score rounded and clamped to 0..=100, 0 when absent
pub fn get_score(obj: &Value, keys: &[&str]) -> u8 {
    get_f64_opt(obj, keys)
        .map(|n| n.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

/// Non-negative integer with default
pub fn get_u32_or(obj: &Value, keys: &[&str], default: u32) -> u32 {
    get_f64_opt(obj, keys)
        .map(|n| n.round().clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(default)
}
