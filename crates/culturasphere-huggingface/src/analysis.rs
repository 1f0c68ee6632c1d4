//! Trend and persona analyses assembled from generated prose.
//!
//! The generation models return unstructured text, so these records are
//! filled by phrase extraction rather than by decoding a schema.

use culturasphere_core::{PersonaForm, TrendRecord};
use serde::Serialize;

use crate::extract;
use crate::types::LabelScore;

/// Free-text analysis of a trend with the sentiment of its description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTextAnalysis {
    pub analysis: String,
    pub sentiment: String,
    pub confidence: f64,
    pub cultural_significance: String,
    pub recommendations: Vec<String>,
}

impl TrendTextAnalysis {
    #[must_use]
    pub fn from_text(analysis: String, sentiment: LabelScore) -> Self {
        Self {
            cultural_significance: extract::extract_cultural_significance(&analysis),
            recommendations: extract::extract_recommendations(&analysis),
            sentiment: sentiment.label,
            confidence: sentiment.score,
            analysis,
        }
    }
}

/// Cultural phrases extracted from a generated persona description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaTextInsights {
    pub sentiment: String,
    pub cultural_context: Vec<String>,
    pub trends: Vec<String>,
    pub recommendations: Vec<String>,
}

impl PersonaTextInsights {
    /// Generated text always reads as `"positive"`; only the phrases vary.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            sentiment: "positive".to_string(),
            cultural_context: extract::extract_cultural_context(text),
            trends: extract::extract_trends(text),
            recommendations: extract::extract_recommendations(text),
        }
    }

    /// Used when generation fails.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            sentiment: "neutral".to_string(),
            cultural_context: Vec::new(),
            trends: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

pub(crate) fn trend_prompt(trend: &TrendRecord) -> String {
    format!(
        "Analyze this cultural trend:\n\
         Name: {name}\n\
         Category: {category}\n\
         Region: {region}\n\
         Keywords: {keywords}\n\n\
         Provide analysis of cultural significance, growth potential, and strategic recommendations:",
        name = trend.name,
        category = trend.category,
        region = trend.region,
        keywords = trend.keywords.join(", "),
    )
}

pub(crate) fn persona_prompt(form: &PersonaForm) -> String {
    format!(
        "Analyze the cultural context for a persona with these characteristics:\n\
         Age: {age}\n\
         Location: {location}\n\
         Interests: {interests}\n\
         Values: {values}\n\n\
         Provide cultural insights, trends, and recommendations:",
        age = form.age_range.as_deref().unwrap_or_default(),
        location = form.region.as_deref().unwrap_or_default(),
        interests = form.interest_tokens().join(", "),
        values = form.value_tokens().join(", "),
    )
}
