//! The aggregation service: five read operations over a trend source and a
//! completion backend.
//!
//! Each public operation wraps a fallible `try_*` counterpart and converts any
//! [`AggregationError`] into that operation's fallback after logging it.

use std::sync::Arc;

use chrono::Utc;
use culturasphere_core::{
    AiAnalysis, AppConfig, CollaborationPlan, CulturalInsightRecord, InsightFilters, PersonaForm,
    PersonaRecord, TrendForecast, TrendRecord,
};
use culturasphere_gemini::{extract_json, GeminiClient, GenerationOptions};
use culturasphere_qloo::{QlooClient, RawTrend};
use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

use crate::backends::{CompletionBackend, TrendSource};
use crate::defaults::{
    self, DEFAULT_TREND_CATEGORY, DEFAULT_TREND_REGION, DERIVED_CHANGE_BOUND,
    DERIVED_GROWTH_BOUND, DERIVED_SCORE_BOUND,
};
use crate::error::{AggregationError, BuildError};
use crate::ids::TrendFingerprint;
use crate::prompts::{self, MAX_PROMPT_COLLABORATORS};
use crate::{persona, replies};

const LIST_TRENDS: &str = "list_trends";
const GENERATE_PERSONA: &str = "generate_persona";
const CULTURAL_INSIGHTS: &str = "get_cultural_insights";
const TREND_FORECAST: &str = "predict_trend_evolution";
const COLLABORATION: &str = "get_collaboration_recommendations";

/// Merges source data with generative enrichment into typed records.
#[derive(Clone)]
pub struct AggregationService {
    source: Arc<dyn TrendSource>,
    completions: Arc<dyn CompletionBackend>,
    options: GenerationOptions,
}

impl AggregationService {
    #[must_use]
    pub fn new(source: Arc<dyn TrendSource>, completions: Arc<dyn CompletionBackend>) -> Self {
        Self {
            source,
            completions,
            options: GenerationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_generation_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the production service backed by the Qloo and Gemini HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCredential`] if `QLOO_API_KEY` or
    /// `GEMINI_API_KEY` is unset, or another [`BuildError`] if either HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, BuildError> {
        let qloo_api_key = config
            .qloo_api_key
            .as_deref()
            .ok_or(BuildError::MissingCredential("QLOO_API_KEY"))?;
        let gemini_api_key = config
            .gemini_api_key
            .as_deref()
            .ok_or(BuildError::MissingCredential("GEMINI_API_KEY"))?;

        let source = QlooClient::with_options(
            qloo_api_key,
            config.request_timeout_secs,
            &config.qloo_api_url,
            &config.user_agent,
        )?;
        let completions = GeminiClient::with_options(
            gemini_api_key,
            config.request_timeout_secs,
            &config.gemini_api_url,
            &config.user_agent,
        )?;
        let options = GenerationOptions::default()
            .with_temperature(config.gemini_temperature)
            .with_max_output_tokens(config.gemini_max_output_tokens);
        Ok(Self::new(Arc::new(source), Arc::new(completions)).with_generation_options(options))
    }

    // -----------------------------------------------------------------------
    // Trends
    // -----------------------------------------------------------------------

    /// Trends for the optional filters, each with a generative analysis.
    ///
    /// If the source or any single enrichment call fails, the whole listing is
    /// replaced by [`defaults::mock_trends`]. An unparseable analysis only
    /// defaults that trend's `ai_analysis`.
    pub async fn list_trends(
        &self,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Vec<TrendRecord> {
        match self.try_list_trends(category, region).await {
            Ok(trends) => {
                tracing::debug!(operation = LIST_TRENDS, count = trends.len(), "listed trends");
                trends
            }
            Err(e) => {
                tracing::warn!(
                    operation = LIST_TRENDS,
                    error = %e,
                    "trend listing failed; serving mock trends"
                );
                defaults::mock_trends()
            }
        }
    }

    async fn try_list_trends(
        &self,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<TrendRecord>, AggregationError> {
        let category = non_blank(category);
        let region = non_blank(region);

        let response = self.source.fetch_trends(category, region).await?;
        let analyses =
            try_join_all(response.trends.iter().map(|trend| self.analyze_trend(trend))).await?;

        Ok(response
            .trends
            .into_iter()
            .zip(analyses)
            .map(|(raw, analysis)| trend_record(raw, analysis, category, region))
            .collect())
    }

    async fn analyze_trend(&self, trend: &RawTrend) -> Result<AiAnalysis, AggregationError> {
        let prompt = prompts::trend_analysis(trend);
        let reply = self.completions.complete(&prompt, &self.options).await?;
        match parse_object(&reply, LIST_TRENDS) {
            Ok(obj) => Ok(replies::ai_analysis(&obj)),
            Err(e) => {
                tracing::warn!(
                    operation = LIST_TRENDS,
                    trend = %trend.name,
                    error = %e,
                    "unparseable trend analysis; using default analysis"
                );
                Ok(AiAnalysis::default())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Personas
    // -----------------------------------------------------------------------

    /// A persona shaped by `form`, the source's seed data, and generated insights.
    ///
    /// Upstream failure yields [`defaults::mock_persona`]; an unparseable
    /// insights reply only drops `ai_insights`.
    pub async fn generate_persona(&self, form: &PersonaForm) -> PersonaRecord {
        match self.try_generate_persona(form).await {
            Ok(persona) => persona,
            Err(e) => {
                tracing::warn!(
                    operation = GENERATE_PERSONA,
                    error = %e,
                    "persona generation failed; serving mock persona"
                );
                defaults::mock_persona()
            }
        }
    }

    async fn try_generate_persona(
        &self,
        form: &PersonaForm,
    ) -> Result<PersonaRecord, AggregationError> {
        let interests = form.interest_tokens();
        let demographics = persona::seed_demographics(form);
        let prompt = prompts::persona_insights(form);

        let (seed, reply) = tokio::join!(
            self.source.fetch_persona_seed(&interests, &demographics),
            self.completions.complete(&prompt, &self.options),
        );
        let seed = seed?;
        let reply = reply?;

        let insights = match parse_object(&reply, GENERATE_PERSONA) {
            Ok(obj) => Some(replies::persona_insights(&obj)),
            Err(e) => {
                tracing::warn!(
                    operation = GENERATE_PERSONA,
                    error = %e,
                    "unparseable persona insights; omitting aiInsights"
                );
                None
            }
        };

        Ok(persona::assemble(form, seed, insights))
    }

    // -----------------------------------------------------------------------
    // Insights
    // -----------------------------------------------------------------------

    /// At most one generated insight for the filters; empty on any failure.
    pub async fn get_cultural_insights(
        &self,
        filters: &InsightFilters,
    ) -> Vec<CulturalInsightRecord> {
        match self.try_cultural_insight(filters).await {
            Ok(record) => vec![record],
            Err(e) => {
                tracing::warn!(
                    operation = CULTURAL_INSIGHTS,
                    error = %e,
                    "cultural insight generation failed; returning no insights"
                );
                Vec::new()
            }
        }
    }

    async fn try_cultural_insight(
        &self,
        filters: &InsightFilters,
    ) -> Result<CulturalInsightRecord, AggregationError> {
        let query = prompts::insight_query(filters);
        let context = to_json(filters, CULTURAL_INSIGHTS)?;
        let prompt = prompts::cultural_insights(&query, &context);

        let reply = self.completions.complete(&prompt, &self.options).await?;
        let obj = parse_object(&reply, CULTURAL_INSIGHTS)?;
        Ok(replies::cultural_insight(&obj, &query, filters, Utc::now()))
    }

    // -----------------------------------------------------------------------
    // Forecasts
    // -----------------------------------------------------------------------

    /// Six-to-twelve month outlook for `trend`, or `None` on any failure.
    pub async fn predict_trend_evolution(&self, trend: &TrendRecord) -> Option<TrendForecast> {
        let prompt = prompts::trend_forecast(trend);
        let result = async {
            let reply = self.completions.complete(&prompt, &self.options).await?;
            let obj = parse_object(&reply, TREND_FORECAST)?;
            Ok::<_, AggregationError>(replies::trend_forecast(&obj))
        }
        .await;

        result
            .inspect_err(|e| {
                tracing::warn!(
                    operation = TREND_FORECAST,
                    trend = %trend.name,
                    error = %e,
                    "trend forecast failed"
                );
            })
            .ok()
    }

    // -----------------------------------------------------------------------
    // Collaboration
    // -----------------------------------------------------------------------

    /// Ranked partner suggestions for `profile` among the first five
    /// `collaborators`, or `None` on any failure.
    pub async fn get_collaboration_recommendations<P, C>(
        &self,
        profile: &P,
        collaborators: &[C],
    ) -> Option<CollaborationPlan>
    where
        P: Serialize + Sync,
        C: Serialize + Sync,
    {
        self.try_collaboration(profile, collaborators)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    operation = COLLABORATION,
                    error = %e,
                    "collaboration recommendations failed"
                );
            })
            .ok()
    }

    async fn try_collaboration<P, C>(
        &self,
        profile: &P,
        collaborators: &[C],
    ) -> Result<CollaborationPlan, AggregationError>
    where
        P: Serialize + Sync,
        C: Serialize + Sync,
    {
        let shortlist = &collaborators[..collaborators.len().min(MAX_PROMPT_COLLABORATORS)];
        let prompt = prompts::collaboration(
            &to_json(profile, COLLABORATION)?,
            &to_json(shortlist, COLLABORATION)?,
        );

        let reply = self.completions.complete(&prompt, &self.options).await?;
        let obj = parse_object(&reply, COLLABORATION)?;
        Ok(replies::collaboration_plan(&obj))
    }
}

/// Merge a raw source trend and its analysis into a listing record.
fn trend_record(
    raw: RawTrend,
    analysis: AiAnalysis,
    category: Option<&str>,
    region: Option<&str>,
) -> TrendRecord {
    let category = raw
        .category
        .filter(|c| !c.trim().is_empty())
        .or_else(|| category.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TREND_CATEGORY.to_string());
    let region = raw
        .region
        .filter(|r| !r.trim().is_empty())
        .or_else(|| region.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TREND_REGION.to_string());

    let fingerprint = TrendFingerprint::new(&raw.name, &category, &region);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw
        .score
        .filter(|s| s.is_finite())
        .map_or_else(
            || fingerprint.derive(0, DERIVED_SCORE_BOUND) as u8,
            |s| s.round().clamp(0.0, 100.0) as u8,
        );
    let growth = raw
        .growth
        .filter(|g| g.is_finite())
        .unwrap_or_else(|| f64::from(fingerprint.derive(1, DERIVED_CHANGE_BOUND)));
    let predicted_growth = fingerprint.derive(2, DERIVED_GROWTH_BOUND);

    let description = raw
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("Emerging trend in {}", raw.name));

    TrendRecord {
        id: fingerprint.id(),
        name: raw.name,
        category,
        region,
        score,
        change: signed_percent(growth),
        description,
        keywords: raw.keywords.unwrap_or_default(),
        predicted_growth: format!("+{predicted_growth}%"),
        cultural_significance: analysis.cultural_significance.clone(),
        ai_analysis: Some(analysis),
    }
}

fn signed_percent(value: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let value = value + 0.0;
    if value < 0.0 {
        format!("{value}%")
    } else {
        format!("+{value}%")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_object(reply: &str, operation: &'static str) -> Result<Value, AggregationError> {
    extract_json(reply)
        .into_object()
        .ok_or(AggregationError::MalformedReply { operation })
}

fn to_json<T: Serialize + ?Sized>(
    value: &T,
    operation: &'static str,
) -> Result<String, AggregationError> {
    serde_json::to_string(value).map_err(|e| AggregationError::InvalidInput {
        operation,
        reason: e.to_string(),
    })
}
