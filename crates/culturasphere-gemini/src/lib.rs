//! Gemini completion client and tolerant JSON extraction for generative replies.
//!
//! The model is asked to answer in JSON but routinely wraps the object in
//! prose or code fences; [`parse::extract_json`] recovers it.

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use parse::{extract_json, ParsedReply};
pub use types::GenerationOptions;
