//! Hugging Face Inference API client for lightweight text analysis:
//! free-text generation, sentiment labelling, zero-shot classification, and
//! phrase-extracted trend and persona analyses built on top of them.

pub mod analysis;
pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::HuggingFaceClient;
pub use error::HuggingFaceError;
pub use analysis::{PersonaTextInsights, TrendTextAnalysis};
pub use types::LabelScore;
