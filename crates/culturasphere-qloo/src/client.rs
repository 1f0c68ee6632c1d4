//! HTTP client for the Qloo REST API.
//!
//! Wraps `reqwest` with bearer-token auth, base URL normalisation, and typed
//! response deserialization. Any non-2xx status surfaces as [`QlooError::Http`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QlooError;
use crate::types::{
    InsightsRequest, PersonaSeed, PersonaSeedRequest, RecommendationsRequest, SearchRequest,
    SeedDemographics, TrendsResponse,
};

const DEFAULT_BASE_URL: &str = "https://hackathon.api.qloo.com/";
const DEFAULT_USER_AGENT: &str = "culturasphere/0.1 (cultural-intelligence)";

/// Client for the Qloo REST API.
///
/// Use [`QlooClient::new`] for production or [`QlooClient::with_base_url`] to
/// point at a mock server in tests.
pub struct QlooClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl QlooClient {
    /// Creates a new client pointed at the production Qloo API.
    ///
    /// # Errors
    ///
    /// Returns [`QlooError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, QlooError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`QlooError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QlooError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, QlooError> {
        Self::with_options(api_key, timeout_secs, base_url, DEFAULT_USER_AGENT)
    }

    /// Creates a new client with a custom base URL and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Same as [`QlooClient::with_base_url`].
    pub fn with_options(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, QlooError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| QlooError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches trend signals, optionally scoped to a category and/or region.
    ///
    /// Omitted filters are not sent, leaving the server default (all/global).
    ///
    /// # Errors
    ///
    /// - [`QlooError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QlooError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_trends(
        &self,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Result<TrendsResponse, QlooError> {
        let mut params = Vec::new();
        if let Some(c) = category.filter(|c| !c.is_empty()) {
            params.push(("category", c));
        }
        if let Some(r) = region.filter(|r| !r.is_empty()) {
            params.push(("region", r));
        }

        let url = self.build_url("trends", &params)?;
        tracing::debug!(%url, "fetching Qloo trends");
        self.send_json(self.client.get(url.clone()), &url).await
    }

    /// Fetches a persona seed for the given interest tokens and demographics.
    ///
    /// # Errors
    ///
    /// - [`QlooError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QlooError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_persona_seed(
        &self,
        interests: &[String],
        demographics: &SeedDemographics,
    ) -> Result<PersonaSeed, QlooError> {
        let url = self.build_url("persona", &[])?;
        let body = PersonaSeedRequest {
            interests,
            demographics,
        };
        tracing::debug!(%url, interests = interests.len(), "fetching Qloo persona seed");
        self.send_json(self.client.post(url.clone()).json(&body), &url)
            .await
    }

    /// Free-form cultural insights for `query`, with cultural context included.
    ///
    /// The response shape is not fixed, so the body is returned as raw JSON.
    ///
    /// # Errors
    ///
    /// - [`QlooError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QlooError::Deserialize`] if the body is not JSON.
    pub async fn fetch_insights(&self, query: &str) -> Result<Value, QlooError> {
        let url = self.build_url("insights", &[])?;
        let body = InsightsRequest {
            query,
            include_cultural_context: true,
        };
        tracing::debug!(%url, "fetching Qloo insights");
        self.send_json(self.client.post(url.clone()).json(&body), &url)
            .await
    }

    /// Recommendations for `user_id` in the given free-form `context`.
    ///
    /// # Errors
    ///
    /// - [`QlooError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QlooError::Deserialize`] if the body is not JSON.
    pub async fn fetch_recommendations(
        &self,
        user_id: &str,
        context: &Value,
    ) -> Result<Value, QlooError> {
        let url = self.build_url("recommendations", &[])?;
        let body = RecommendationsRequest { user_id, context };
        tracing::debug!(%url, user_id, "fetching Qloo recommendations");
        self.send_json(self.client.post(url.clone()).json(&body), &url)
            .await
    }

    /// Searches cultural content. Pass `&json!({})` for no filters.
    ///
    /// # Errors
    ///
    /// - [`QlooError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QlooError::Deserialize`] if the body is not JSON.
    pub async fn search_content(&self, query: &str, filters: &Value) -> Result<Value, QlooError> {
        let url = self.build_url("search", &[])?;
        let body = SearchRequest {
            query,
            filters,
            cultural_context: true,
        };
        tracing::debug!(%url, "searching Qloo cultural content");
        self.send_json(self.client.post(url.clone()).json(&body), &url)
            .await
    }

    /// Builds an endpoint URL, percent-encoding any query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, QlooError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| QlooError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authenticated request, asserts a 2xx status, and decodes the body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, QlooError> {
        let response = request.bearer_auth(&self.api_key).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| QlooError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
