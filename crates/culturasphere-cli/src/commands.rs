//! Command handlers. Each prints its result to stdout as pretty JSON.

use std::path::Path;

use anyhow::Context;
use culturasphere_core::{AppConfig, InsightFilters, PersonaForm, TrendRecord};
use culturasphere_huggingface::HuggingFaceClient;
use culturasphere_insights::AggregationService;
use culturasphere_qloo::QlooClient;
use serde::Serialize;

fn service(config: &AppConfig) -> anyhow::Result<AggregationService> {
    AggregationService::from_config(config).context("failed to build aggregation service")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_trends(
    config: &AppConfig,
    category: Option<&str>,
    region: Option<&str>,
) -> anyhow::Result<()> {
    let trends = service(config)?.list_trends(category, region).await;
    print_json(&trends)
}

pub(crate) async fn run_persona(config: &AppConfig, form: &PersonaForm) -> anyhow::Result<()> {
    let persona = service(config)?.generate_persona(form).await;
    print_json(&persona)
}

pub(crate) async fn run_insights(
    config: &AppConfig,
    filters: &InsightFilters,
) -> anyhow::Result<()> {
    let insights = service(config)?.get_cultural_insights(filters).await;
    print_json(&insights)
}

pub(crate) async fn run_forecast(config: &AppConfig, trend_file: &Path) -> anyhow::Result<()> {
    let trend: TrendRecord = culturasphere_core::load_document(trend_file)?;
    let forecast = service(config)?.predict_trend_evolution(&trend).await;
    print_json(&forecast)
}

/// Profile and collaborators are passed through untyped; the model sees them
/// exactly as written in the documents.
pub(crate) async fn run_collaborate(
    config: &AppConfig,
    profile: &Path,
    collaborators: &Path,
) -> anyhow::Result<()> {
    let profile: serde_json::Value = culturasphere_core::load_document(profile)?;
    let collaborators: Vec<serde_json::Value> = culturasphere_core::load_document(collaborators)?;
    let plan = service(config)?
        .get_collaboration_recommendations(&profile, &collaborators)
        .await;
    print_json(&plan)
}

fn source_client(config: &AppConfig) -> anyhow::Result<QlooClient> {
    let api_key = config
        .qloo_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("QLOO_API_KEY is not set; cannot query Qloo"))?;
    QlooClient::with_options(
        api_key,
        config.request_timeout_secs,
        &config.qloo_api_url,
        &config.user_agent,
    )
    .context("failed to build Qloo client")
}

/// Reads an optional YAML or JSON document, defaulting to an empty object.
fn optional_document(path: Option<&Path>) -> anyhow::Result<serde_json::Value> {
    match path {
        Some(path) => Ok(culturasphere_core::load_document(path)?),
        None => Ok(serde_json::json!({})),
    }
}

pub(crate) async fn run_source_insights(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let insights = source_client(config)?.fetch_insights(query).await?;
    print_json(&insights)
}

pub(crate) async fn run_recommend(
    config: &AppConfig,
    user_id: &str,
    context: Option<&Path>,
) -> anyhow::Result<()> {
    let context = optional_document(context)?;
    let recommendations = source_client(config)?
        .fetch_recommendations(user_id, &context)
        .await?;
    print_json(&recommendations)
}

pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    filters: Option<&Path>,
) -> anyhow::Result<()> {
    let filters = optional_document(filters)?;
    let results = source_client(config)?.search_content(query, &filters).await?;
    print_json(&results)
}

fn text_client(config: &AppConfig) -> anyhow::Result<HuggingFaceClient> {
    let api_key = config.huggingface_api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!("HUGGINGFACE_API_KEY is not set; cannot run text analysis")
    })?;
    HuggingFaceClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.huggingface_api_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Hugging Face client: {e}"))
}

pub(crate) async fn run_analyze_trend(
    config: &AppConfig,
    trend_file: &Path,
) -> anyhow::Result<()> {
    let trend: TrendRecord = culturasphere_core::load_document(trend_file)?;
    let analysis = text_client(config)?.analyze_cultural_trend(&trend).await;
    print_json(&analysis)
}

pub(crate) async fn run_persona_text(
    config: &AppConfig,
    form: &PersonaForm,
) -> anyhow::Result<()> {
    let insights = text_client(config)?.persona_insights(form).await;
    print_json(&insights)
}

pub(crate) async fn run_sentiment(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let label = text_client(config)?.analyze_sentiment_or_neutral(text).await;
    print_json(&label)
}

pub(crate) async fn run_classify(
    config: &AppConfig,
    text: &str,
    labels: &[String],
) -> anyhow::Result<()> {
    let scores = text_client(config)?.classify_text(text, labels).await?;
    print_json(&scores)
}
