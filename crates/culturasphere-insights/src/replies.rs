//! Map decoded enrichment replies onto typed records.
//!
//! All mappers are total: a reply object with missing or mistyped fields
//! still yields a record, with the documented defaults filled in.

use chrono::{DateTime, Utc};
use culturasphere_core::trends::DEFAULT_ANALYSIS_CONFIDENCE;
use culturasphere_core::{
    AiAnalysis, CollaborationPlan, CollaboratorMatch, CulturalInsightRecord, DemographicAdoption,
    InsightFilters, InsightMetrics, PersonaInsights, Priority, Sentiment, TrendForecast,
};
use serde_json::Value;

use crate::defaults::DEFAULT_TREND_CATEGORY;
use crate::fields;

const AI_GENERATED_TAG: &str = "AI Generated";

pub(crate) fn ai_analysis(obj: &Value) -> AiAnalysis {
    AiAnalysis {
        sentiment: fields::string(obj, "sentiment")
            .map_or(Sentiment::Neutral, |s| Sentiment::from_label(&s)),
        cultural_context: fields::string_list(obj, "culturalContext"),
        trends: fields::string_list(obj, "trends"),
        recommendations: fields::string_list(obj, "recommendations"),
        confidence: fields::confidence(obj, "confidence").unwrap_or(DEFAULT_ANALYSIS_CONFIDENCE),
        analysis: fields::string(obj, "analysis"),
        cultural_significance: fields::string(obj, "culturalSignificance"),
    }
}

pub(crate) fn persona_insights(obj: &Value) -> PersonaInsights {
    PersonaInsights {
        cultural_context: fields::string_list(obj, "culturalContext"),
        media_consumption: fields::string_list(obj, "mediaConsumption"),
        brand_affinities: fields::string_list(obj, "brandAffinities"),
        communication_style: fields::string(obj, "communicationStyle"),
        pain_points: fields::string_list(obj, "painPoints"),
        motivations: fields::string_list(obj, "motivations"),
        recommendations: fields::string_list(obj, "recommendations"),
        cultural_nuances: fields::string(obj, "culturalNuances"),
    }
}

/// One insight record stamped with `now`.
///
/// Tags are the request's category and region (when set) plus
/// `"AI Generated"`. A reply without a title falls back to `query`.
pub(crate) fn cultural_insight(
    obj: &Value,
    query: &str,
    filters: &InsightFilters,
    now: DateTime<Utc>,
) -> CulturalInsightRecord {
    let category = fields::string(obj, "category")
        .or_else(|| non_blank(filters.category.as_deref()))
        .unwrap_or_else(|| DEFAULT_TREND_CATEGORY.to_string());

    let metrics = obj.get("metrics").map_or_else(InsightMetrics::default, |m| {
        InsightMetrics {
            opportunity_size: fields::string_or_default(m, "opportunitySize"),
            confidence: fields::string(m, "confidence")
                .or_else(|| fields::percent_label(m, "confidence"))
                .unwrap_or_default(),
            timeline: fields::string_or_default(m, "timeline"),
        }
    });

    let tags = [
        non_blank(filters.category.as_deref()),
        non_blank(filters.region.as_deref()),
        Some(AI_GENERATED_TAG.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    CulturalInsightRecord {
        id: now.timestamp_millis(),
        title: fields::string(obj, "title").unwrap_or_else(|| query.to_string()),
        description: fields::string_or_default(obj, "description"),
        category,
        priority: fields::string(obj, "priority")
            .map_or(Priority::Medium, |p| Priority::from_label(&p)),
        impact: fields::string_or_default(obj, "impact"),
        action_items: fields::string_list(obj, "actionItems"),
        metrics,
        cultural_significance: fields::string(obj, "culturalSignificance"),
        recommendations: fields::string_list(obj, "recommendations"),
        generated_date: now.date_naive(),
        tags,
    }
}

pub(crate) fn trend_forecast(obj: &Value) -> TrendForecast {
    let adoption = obj
        .get("demographicAdoption")
        .map_or_else(DemographicAdoption::default, |a| DemographicAdoption {
            early: fields::string_list(a, "early"),
            mainstream: fields::string_list(a, "mainstream"),
        });

    TrendForecast {
        growth_trajectory: fields::string_or_default(obj, "growthTrajectory"),
        predicted_score: fields::number(obj, "predictedScore"),
        geographic_expansion: fields::string_list(obj, "geographicExpansion"),
        demographic_adoption: adoption,
        market_disruptions: fields::string_list(obj, "marketDisruptions"),
        timing_recommendations: fields::string_list(obj, "timingRecommendations"),
        confidence: fields::confidence(obj, "confidence").unwrap_or(DEFAULT_ANALYSIS_CONFIDENCE),
    }
}

/// Entries without a usable `collaboratorId` are dropped.
pub(crate) fn collaboration_plan(obj: &Value) -> CollaborationPlan {
    let recommendations = obj
        .get("recommendations")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(collaborator_match).collect())
        .unwrap_or_default();

    CollaborationPlan {
        recommendations,
        strategic_insights: fields::string_list(obj, "strategicInsights"),
        market_opportunities: fields::string_list(obj, "marketOpportunities"),
    }
}

fn collaborator_match(entry: &Value) -> Option<CollaboratorMatch> {
    // Models echo ids back as either strings or numbers.
    let collaborator_id = match entry.get("collaboratorId")? {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(CollaboratorMatch {
        collaborator_id,
        match_score: fields::score(entry, "matchScore").unwrap_or_default(),
        reasoning: fields::string_or_default(entry, "reasoning"),
        opportunities: fields::string_list(entry, "opportunities"),
        cultural_synergy: fields::string_or_default(entry, "culturalSynergy"),
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
