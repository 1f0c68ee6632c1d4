use serde::{Deserialize, Serialize};

/// Persona generator input as submitted from the dashboard form.
///
/// `interests` and `values` are comma-separated free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaForm {
    pub age_range: Option<String>,
    pub region: Option<String>,
    pub industry: Option<String>,
    pub target_market: Option<String>,
    pub interests: Option<String>,
    pub values: Option<String>,
}

impl PersonaForm {
    /// Interest tokens, trimmed, with empty entries dropped.
    #[must_use]
    pub fn interest_tokens(&self) -> Vec<String> {
        split_tokens(self.interests.as_deref())
    }

    /// Value tokens, trimmed, with empty entries dropped.
    #[must_use]
    pub fn value_tokens(&self) -> Vec<String> {
        split_tokens(self.values.as_deref())
    }
}

fn split_tokens(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub lifestyle: String,
    pub family_status: String,
    pub tech_savviness: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Psychographics {
    pub values: Vec<String>,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalProfile {
    pub influences: Vec<String>,
    pub media_consumption: Vec<String>,
    pub shopping_behavior: String,
    pub brand_affinities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub preferred_channels: Vec<String>,
    pub content_types: Vec<String>,
    pub communication_style: String,
}

/// Generative insights layered on top of a persona.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaInsights {
    pub cultural_context: Vec<String>,
    pub media_consumption: Vec<String>,
    pub brand_affinities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    pub pain_points: Vec<String>,
    pub motivations: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_nuances: Option<String>,
}

/// A synthetic audience persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub occupation: String,
    pub income: String,
    pub education: String,
    pub demographics: Demographics,
    pub psychographics: Psychographics,
    pub cultural_profile: CulturalProfile,
    pub engagement: Engagement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<PersonaInsights>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_trimmed_and_empty_entries_dropped() {
        let form = PersonaForm {
            interests: Some(" Gaming, ,Streetwear ,".to_string()),
            ..PersonaForm::default()
        };
        assert_eq!(form.interest_tokens(), vec!["Gaming", "Streetwear"]);
    }

    #[test]
    fn absent_tokens_are_empty() {
        let form = PersonaForm::default();
        assert!(form.interest_tokens().is_empty());
        assert!(form.value_tokens().is_empty());
    }

    #[test]
    fn form_deserializes_from_camel_case() {
        let form: PersonaForm = serde_json::from_value(serde_json::json!({
            "ageRange": "25-34",
            "targetMarket": "B2C"
        }))
        .unwrap();
        assert_eq!(form.age_range.as_deref(), Some("25-34"));
        assert_eq!(form.target_market.as_deref(), Some("B2C"));
        assert!(form.region.is_none());
    }
}
