//! Seams between the aggregation service and its two collaborators.
//!
//! Production code plugs in [`QlooClient`] and [`GeminiClient`]; tests plug in
//! doubles that return canned data or fail on demand.

use async_trait::async_trait;
use culturasphere_gemini::{GeminiClient, GenerationOptions};
use culturasphere_qloo::{PersonaSeed, QlooClient, SeedDemographics, TrendsResponse};

use crate::error::AggregationError;

/// Structured trend and persona signal data.
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn fetch_trends(
        &self,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Result<TrendsResponse, AggregationError>;

    async fn fetch_persona_seed(
        &self,
        interests: &[String],
        demographics: &SeedDemographics,
    ) -> Result<PersonaSeed, AggregationError>;
}

/// Free-text generative completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, AggregationError>;
}

#[async_trait]
impl TrendSource for QlooClient {
    async fn fetch_trends(
        &self,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Result<TrendsResponse, AggregationError> {
        Ok(QlooClient::fetch_trends(self, category, region).await?)
    }

    async fn fetch_persona_seed(
        &self,
        interests: &[String],
        demographics: &SeedDemographics,
    ) -> Result<PersonaSeed, AggregationError> {
        Ok(QlooClient::fetch_persona_seed(self, interests, demographics).await?)
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, AggregationError> {
        Ok(GeminiClient::complete(self, prompt, options).await?)
    }
}
