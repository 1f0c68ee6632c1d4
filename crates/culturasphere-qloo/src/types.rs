//! Qloo API request and response types.
//!
//! Every field the API may omit is optional or defaulted; the aggregation
//! layer decides what to substitute.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GET /trends
// ---------------------------------------------------------------------------

/// Wrapper for the `/trends` response: `{ "trends": [ ... ] }`.
#[derive(Debug, Default, Deserialize)]
pub struct TrendsResponse {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub trends: Vec<RawTrend>,
}

/// A single trend signal as reported by the source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTrend {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Popularity score, nominally `0..=100`.
    #[serde(default)]
    pub score: Option<f64>,
    /// Recent growth in percent.
    #[serde(default)]
    pub growth: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// POST /persona
// ---------------------------------------------------------------------------

/// Body for the `/persona` request.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaSeedRequest<'a> {
    pub interests: &'a [String],
    pub demographics: &'a SeedDemographics,
}

/// Demographic filters sent with a persona seed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedDemographics {
    pub age: Option<String>,
    pub region: Option<String>,
    pub industry: Option<String>,
}

/// Persona signal data returned from `/persona`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonaSeed {
    #[serde(default)]
    pub preferences: SeedPreferences,
    #[serde(default)]
    pub demographics: SeedProfile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedPreferences {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedProfile {
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

// ---------------------------------------------------------------------------
// POST /insights, /recommendations, /search
// ---------------------------------------------------------------------------

/// Body for the `/insights` request.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsRequest<'a> {
    pub query: &'a str,
    pub include_cultural_context: bool,
}

/// Body for the `/recommendations` request.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsRequest<'a> {
    pub user_id: &'a str,
    pub context: &'a serde_json::Value,
}

/// Body for the `/search` request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub filters: &'a serde_json::Value,
    pub cultural_context: bool,
}
