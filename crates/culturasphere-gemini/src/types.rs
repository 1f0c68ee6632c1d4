//! `generateContent` request and response envelopes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Sampling settings sent as `generationConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Sampling randomness in `[0.0, 1.0]`.
    pub temperature: f32,
    /// Number of candidate tokens considered at each step.
    pub top_k: u32,
    /// Cumulative probability mass for nucleus sampling.
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationOptions {
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub contents: [RequestContent<'a>; 1],
    pub generation_config: &'a GenerationOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContent<'a> {
    pub parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn new(prompt: &'a str, options: &'a GenerationOptions) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: options,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if the envelope has one.
    pub(crate) fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let options = GenerationOptions::default();
        let request = GenerateRequest::new("hello", &options);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": {
                    "temperature": 0.7_f32,
                    "topK": 40,
                    "topP": 0.95_f32,
                    "maxOutputTokens": 1024
                }
            })
        );
    }

    #[test]
    fn temperature_is_clamped() {
        let options = GenerationOptions::default().with_temperature(1.7);
        assert!((options.temperature - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn first_text_requires_full_path() {
        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(empty.into_first_text().is_none());

        let no_parts: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(no_parts.into_first_text().is_none());

        let ok: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#)
                .unwrap();
        assert_eq!(ok.into_first_text().as_deref(), Some("hi"));
    }
}
