use serde::{Deserialize, Serialize};

/// Confidence assigned to an analysis when the model does not report one.
pub const DEFAULT_ANALYSIS_CONFIDENCE: f64 = 0.8;

/// Overall tone the enrichment model assigns to a trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Map a free-form model label onto a sentiment, case-insensitively.
    ///
    /// Anything unrecognised is `Neutral`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "POSITIVE"),
            Sentiment::Negative => write!(f, "NEGATIVE"),
            Sentiment::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Generative analysis attached to a trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAnalysis {
    pub sentiment: Sentiment,
    pub cultural_context: Vec<String>,
    pub trends: Vec<String>,
    pub recommendations: Vec<String>,
    /// Model-reported confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
}

impl Default for AiAnalysis {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            cultural_context: Vec::new(),
            trends: Vec::new(),
            recommendations: Vec::new(),
            confidence: DEFAULT_ANALYSIS_CONFIDENCE,
            analysis: None,
            cultural_significance: None,
        }
    }
}

/// A scored cultural trend, as returned from a trend listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendRecord {
    /// Stable key derived from the trend's identifying content.
    pub id: String,
    pub name: String,
    pub category: String,
    pub region: String,
    /// Popularity score in `0..=100`.
    pub score: u8,
    /// Recent change, e.g. `"+12%"`.
    pub change: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Forecast growth, e.g. `"+25%"`.
    pub predicted_growth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

/// Which audience segments pick a trend up first, and which follow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicAdoption {
    pub early: Vec<String>,
    pub mainstream: Vec<String>,
}

/// Forecast of how a trend evolves over the next six to twelve months.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendForecast {
    pub growth_trajectory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_score: Option<f64>,
    pub geographic_expansion: Vec<String>,
    pub demographic_adoption: DemographicAdoption,
    pub market_disruptions: Vec<String>,
    pub timing_recommendations: Vec<String>,
    pub confidence: f64,
}
