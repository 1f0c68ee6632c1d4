use thiserror::Error;

/// Errors returned by the Gemini completion client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network failure or non-2xx status. The request URL is stripped so the
    /// API key never reaches logs.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The response body was JSON but lacked `candidates[0].content.parts[0].text`.
    #[error("malformed completion envelope: {0}")]
    MalformedEnvelope(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
