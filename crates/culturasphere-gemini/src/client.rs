//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! One call per prompt: no batching, caching, or retry. Authentication is the
//! `?key=` query parameter, so transport errors are stripped of their URL
//! before they leave this module.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{GenerateRequest, GenerateResponse, GenerationOptions};

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const DEFAULT_USER_AGENT: &str = "culturasphere/0.1 (cultural-intelligence)";

/// Client for a Gemini-style completion endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client for the public `gemini-pro` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_endpoint(api_key, timeout_secs, DEFAULT_ENDPOINT)
    }

    /// Creates a client for an arbitrary completion endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeminiError::InvalidEndpoint`] if `endpoint` is not a valid URL.
    pub fn with_endpoint(
        api_key: &str,
        timeout_secs: u64,
        endpoint: &str,
    ) -> Result<Self, GeminiError> {
        Self::with_options(api_key, timeout_secs, endpoint, DEFAULT_USER_AGENT)
    }

    /// Creates a client with an explicit endpoint and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Same as [`GeminiClient::with_endpoint`].
    pub fn with_options(
        api_key: &str,
        timeout_secs: u64,
        endpoint: &str,
        user_agent: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| GeminiError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Sends `prompt` and returns the model's free-form reply text.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure or non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body is not JSON.
    /// - [`GeminiError::MalformedEnvelope`] if the JSON lacks the reply text.
    pub async fn complete(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GeminiError> {
        let body = GenerateRequest::new(prompt, options);

        let response = self
            .client
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let raw = response.text().await.map_err(reqwest::Error::without_url)?;

        let envelope: GenerateResponse =
            serde_json::from_str(&raw).map_err(|e| GeminiError::Deserialize {
                context: self.endpoint.path().to_string(),
                source: e,
            })?;

        let text = envelope.into_first_text().ok_or_else(|| {
            GeminiError::MalformedEnvelope("missing candidates[0].content.parts[0].text".into())
        })?;

        tracing::debug!(
            prompt_chars = prompt.len(),
            reply_chars = text.len(),
            "Gemini completion received"
        );
        Ok(text)
    }

    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_appends_key() {
        let client = GeminiClient::with_endpoint(
            "secret",
            30,
            "https://llm.example.com/v1beta/models/m:generateContent",
        )
        .unwrap();
        assert_eq!(
            client.request_url().as_str(),
            "https://llm.example.com/v1beta/models/m:generateContent?key=secret"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = GeminiClient::with_endpoint("secret", 30, "::nope::");
        assert!(matches!(result, Err(GeminiError::InvalidEndpoint { .. })));
    }
}
