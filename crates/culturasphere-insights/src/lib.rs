//! Trend, persona, and insight aggregation.
//!
//! Merges structured signal data from the Qloo source with Gemini
//! enrichment into typed records. Read operations never fail: upstream or
//! parse problems are logged and replaced by each operation's fallback
//! (mock records, an empty list, or `None`).

pub mod backends;
pub mod defaults;
pub mod error;
pub mod prompts;
pub mod service;

mod fields;
mod ids;
mod persona;
mod replies;

pub use backends::{CompletionBackend, TrendSource};
pub use error::{AggregationError, BuildError};
pub use service::AggregationService;
