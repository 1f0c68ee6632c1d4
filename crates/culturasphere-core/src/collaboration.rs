use serde::{Deserialize, Serialize};

/// One ranked partner suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollaboratorMatch {
    pub collaborator_id: String,
    /// Fit score in `0..=100`.
    pub match_score: u8,
    pub reasoning: String,
    pub opportunities: Vec<String>,
    pub cultural_synergy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollaborationPlan {
    pub recommendations: Vec<CollaboratorMatch>,
    pub strategic_insights: Vec<String>,
    pub market_opportunities: Vec<String>,
}
