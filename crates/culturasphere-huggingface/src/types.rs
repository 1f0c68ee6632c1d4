use serde::{Deserialize, Serialize};

pub const SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const ZERO_SHOT_MODEL: &str = "facebook/bart-large-mnli";
pub const DEFAULT_TEXT_MODEL: &str = "gpt2";
pub const PERSONA_MODEL: &str = "microsoft/DialoGPT-large";

/// A classifier label with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    /// The fallback used when sentiment cannot be determined.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            label: "NEUTRAL".to_string(),
            score: 0.5,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InferenceRequest<'a, I: Serialize> {
    pub inputs: I,
    pub options: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
pub(crate) struct ZeroShotInputs<'a> {
    pub text: &'a str,
    pub candidate_labels: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedText {
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// Text-classification replies come back either flat or nested one level
/// per input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    /// The highest-scoring label across the reply.
    pub(crate) fn top(self) -> Option<LabelScore> {
        let labels = match self {
            ClassificationResponse::Nested(outer) => outer.into_iter().flatten().collect(),
            ClassificationResponse::Flat(labels) => labels,
        };
        labels
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ZeroShotResponse {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub scores: Vec<f64>,
}

impl ZeroShotResponse {
    pub(crate) fn into_label_scores(self) -> Vec<LabelScore> {
        self.labels
            .into_iter()
            .zip(self.scores)
            .map(|(label, score)| LabelScore { label, score })
            .collect()
    }
}
