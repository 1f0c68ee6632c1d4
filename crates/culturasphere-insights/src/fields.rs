//! Lenient accessors over decoded model replies.
//!
//! The model does not always respect the requested schema, so every accessor
//! treats a missing or wrongly-typed field as absent instead of failing.

use serde_json::Value;

/// Non-empty trimmed string at `key`.
pub(crate) fn string(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn string_or_default(obj: &Value, key: &str) -> String {
    string(obj, key).unwrap_or_default()
}

/// Strings in the array at `key`; non-string entries and blanks are skipped.
/// A bare string is accepted as a one-element list.
pub(crate) fn string_list(obj: &Value, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

/// Number at `key`, also accepting numeric strings such as `"87"`.
pub(crate) fn number(obj: &Value, key: &str) -> Option<f64> {
    let value = match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|n| n.is_finite())
}

/// Confidence in `[0.0, 1.0]`. Percent-style values (`87`) are rescaled.
pub(crate) fn confidence(obj: &Value, key: &str) -> Option<f64> {
    let raw = number(obj, key)?;
    let scaled = if raw > 1.0 { raw / 100.0 } else { raw };
    Some(scaled.clamp(0.0, 1.0))
}

/// Confidence rendered as a whole percentage, e.g. `0.82` and `82` both
/// become `"82%"`.
pub(crate) fn percent_label(obj: &Value, key: &str) -> Option<String> {
    confidence(obj, key).map(|c| format!("{}%", (c * 100.0).round()))
}

/// Integer score clamped to `0..=100`.
pub(crate) fn score(obj: &Value, key: &str) -> Option<u8> {
    let raw = number(obj, key)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(raw.round().clamp(0.0, 100.0) as u8)
}
