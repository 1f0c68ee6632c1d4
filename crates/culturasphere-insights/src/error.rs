use culturasphere_gemini::GeminiError;
use culturasphere_qloo::QlooError;
use thiserror::Error;

/// Why an aggregation step could not produce its normal result.
///
/// Never returned from the public read operations; they log it and fall back.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// Transport failure, non-2xx status, or unusable envelope from a collaborator.
    #[error("{service} unavailable: {reason}")]
    UpstreamUnavailable {
        service: &'static str,
        reason: String,
    },

    /// The enrichment reply contained no recoverable JSON object.
    #[error("malformed reply for {operation}")]
    MalformedReply { operation: &'static str },

    /// Caller-supplied input could not be serialized into a prompt.
    #[error("invalid input for {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },
}

impl From<QlooError> for AggregationError {
    fn from(err: QlooError) -> Self {
        AggregationError::UpstreamUnavailable {
            service: "qloo",
            reason: err.to_string(),
        }
    }
}

impl From<GeminiError> for AggregationError {
    fn from(err: GeminiError) -> Self {
        AggregationError::UpstreamUnavailable {
            service: "gemini",
            reason: err.to_string(),
        }
    }
}

/// Failure to construct the production HTTP clients. Fatal at startup.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing required environment variable: {0}")]
    MissingCredential(&'static str),

    #[error("Qloo client: {0}")]
    Qloo(#[from] QlooError),

    #[error("Gemini client: {0}")]
    Gemini(#[from] GeminiError),
}
