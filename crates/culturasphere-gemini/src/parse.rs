//! Recover a JSON object from free-form model output.
//!
//! Replies are supposed to be a bare JSON object but often arrive with a
//! preamble, a trailing sign-off, or a fenced code block. Extraction tries,
//! in order:
//!
//! 1. the whole (trimmed) text as a JSON object;
//! 2. each `{` in turn, paired with its matching `}` (string- and
//!    escape-aware), until one span decodes to an object;
//! 3. the span from the first `{` to the last `}`.
//!
//! If nothing decodes, the caller gets [`ParsedReply::Unparsed`] carrying the
//! raw text instead of an error.

use serde_json::Value;

/// Error label carried by the sentinel.
pub const PARSE_FAILED: &str = "parse failed";

/// Outcome of [`extract_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// A decoded JSON object.
    Parsed(Value),
    /// Sentinel: no object could be recovered.
    Unparsed { error: String, raw_response: String },
}

impl ParsedReply {
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedReply::Parsed(_))
    }

    /// The decoded object, or `None` for the sentinel.
    #[must_use]
    pub fn into_object(self) -> Option<Value> {
        match self {
            ParsedReply::Parsed(value) => Some(value),
            ParsedReply::Unparsed { .. } => None,
        }
    }

    /// Render as JSON; the sentinel becomes `{"error": ..., "rawResponse": ...}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            ParsedReply::Parsed(value) => value.clone(),
            ParsedReply::Unparsed {
                error,
                raw_response,
            } => serde_json::json!({
                "error": error,
                "rawResponse": raw_response,
            }),
        }
    }
}

/// Extract the first recoverable JSON object from `text`.
#[must_use]
pub fn extract_json(text: &str) -> ParsedReply {
    if let Some(value) = decode_object(text.trim()) {
        return ParsedReply::Parsed(value);
    }

    for (start, _) in text.match_indices('{') {
        if let Some(end) = matching_brace(text, start) {
            if let Some(value) = decode_object(&text[start..=end]) {
                return ParsedReply::Parsed(value);
            }
        }
    }

    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) {
        if first < last {
            if let Some(value) = decode_object(&text[first..=last]) {
                return ParsedReply::Parsed(value);
            }
        }
    }

    tracing::debug!(chars = text.len(), "no JSON object recoverable from reply");
    ParsedReply::Unparsed {
        error: PARSE_FAILED.to_string(),
        raw_response: text.to_string(),
    }
}

fn decode_object(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// Byte index of the `}` closing the `{` at `start`, ignoring braces inside
/// string literals.
fn matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}
