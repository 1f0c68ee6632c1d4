//! HTTP client for the Hugging Face Inference API.

use std::time::Duration;

use culturasphere_core::{PersonaForm, TrendRecord};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::analysis::{self, PersonaTextInsights, TrendTextAnalysis};
use crate::error::HuggingFaceError;
use crate::types::{
    ClassificationResponse, GeneratedText, InferenceRequest, LabelScore, ZeroShotInputs,
    ZeroShotResponse, DEFAULT_TEXT_MODEL, PERSONA_MODEL, SENTIMENT_MODEL, ZERO_SHOT_MODEL,
};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/";

pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl HuggingFaceClient {
    /// # Errors
    ///
    /// Returns [`HuggingFaceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, HuggingFaceError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`HuggingFaceError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`HuggingFaceError::InvalidBaseUrl`] for an unparsable URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, HuggingFaceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| HuggingFaceError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Generate a continuation of `prompt` with a text-generation model.
    ///
    /// Returns an empty string when the model produces nothing.
    ///
    /// # Errors
    ///
    /// Returns [`HuggingFaceError`] on HTTP or decoding failure.
    pub async fn generate_text(&self, prompt: &str, model: &str) -> Result<String, HuggingFaceError> {
        let options = json!({ "max_length": 200, "temperature": 0.7 });
        let replies: Vec<GeneratedText> = self.infer(model, prompt, &options).await?;
        Ok(replies
            .into_iter()
            .next()
            .and_then(|r| r.generated_text)
            .unwrap_or_default())
    }

    /// Generated analysis of `trend` with the sentiment of its description.
    ///
    /// Returns `None` if generation fails. A failed sentiment call falls back
    /// to [`LabelScore::neutral`], as does a blank description.
    pub async fn analyze_cultural_trend(&self, trend: &TrendRecord) -> Option<TrendTextAnalysis> {
        let prompt = analysis::trend_prompt(trend);
        let text = match self.generate_text(&prompt, DEFAULT_TEXT_MODEL).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(trend = %trend.name, error = %e, "trend text analysis failed");
                return None;
            }
        };

        let sentiment = if trend.description.trim().is_empty() {
            LabelScore::neutral()
        } else {
            self.analyze_sentiment_or_neutral(&trend.description).await
        };
        Some(TrendTextAnalysis::from_text(text, sentiment))
    }

    /// Cultural phrases generated for a persona described by `form`.
    ///
    /// Falls back to [`PersonaTextInsights::neutral`] if generation fails.
    pub async fn persona_insights(&self, form: &PersonaForm) -> PersonaTextInsights {
        let prompt = analysis::persona_prompt(form);
        match self.generate_text(&prompt, PERSONA_MODEL).await {
            Ok(text) => PersonaTextInsights::from_text(&text),
            Err(e) => {
                tracing::warn!(error = %e, "persona text insights failed; defaulting to neutral");
                PersonaTextInsights::neutral()
            }
        }
    }

    /// Top sentiment label for `text`; an empty reply is treated as neutral.
    ///
    /// # Errors
    ///
    /// Returns [`HuggingFaceError`] on HTTP or decoding failure.
    pub async fn analyze_sentiment(&self, text: &str) -> Result<LabelScore, HuggingFaceError> {
        let reply: ClassificationResponse = self
            .infer(SENTIMENT_MODEL, text, &json!({}))
            .await?;
        Ok(reply.top().unwrap_or_else(LabelScore::neutral))
    }

    /// Like [`HuggingFaceClient::analyze_sentiment`] but never fails.
    pub async fn analyze_sentiment_or_neutral(&self, text: &str) -> LabelScore {
        match self.analyze_sentiment(text).await {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(error = %e, "sentiment analysis failed; defaulting to neutral");
                LabelScore::neutral()
            }
        }
    }

    /// Zero-shot classification of `text` against `labels`.
    ///
    /// # Errors
    ///
    /// Returns [`HuggingFaceError`] on HTTP or decoding failure.
    pub async fn classify_text(
        &self,
        text: &str,
        labels: &[String],
    ) -> Result<Vec<LabelScore>, HuggingFaceError> {
        let inputs = ZeroShotInputs {
            text,
            candidate_labels: labels,
        };
        let reply: ZeroShotResponse = self
            .infer(ZERO_SHOT_MODEL, inputs, &json!({}))
            .await?;
        Ok(reply.into_label_scores())
    }

    fn model_url(&self, model: &str) -> Result<Url, HuggingFaceError> {
        self.base_url
            .join(&format!("models/{model}"))
            .map_err(|e| HuggingFaceError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn infer<I, T>(
        &self,
        model: &str,
        inputs: I,
        options: &serde_json::Value,
    ) -> Result<T, HuggingFaceError>
    where
        I: Serialize,
        T: DeserializeOwned,
    {
        let url = self.model_url(model)?;
        let body = InferenceRequest { inputs, options };
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| HuggingFaceError::Deserialize {
            context: format!("models/{model}"),
            source: e,
        })
    }
}
