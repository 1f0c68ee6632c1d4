use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scope of a cultural-insight request. Absent fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parse a model-supplied priority label; unknown labels map to `Medium`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightMetrics {
    pub opportunity_size: String,
    pub confidence: String,
    pub timeline: String,
}

/// An actionable cultural insight produced by the enrichment model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalInsightRecord {
    /// Milliseconds since the Unix epoch at generation time.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub impact: String,
    pub action_items: Vec<String>,
    pub metrics: InsightMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    pub recommendations: Vec<String>,
    pub generated_date: NaiveDate,
    pub tags: Vec<String>,
}
