//! Prompt templates for each enrichment call.
//!
//! Every template ends with the JSON shape the reply is expected to follow;
//! the reply mappers in this crate read those same field names.

use culturasphere_core::{InsightFilters, PersonaForm, TrendRecord};
use culturasphere_qloo::RawTrend;

/// Upper bound on collaborators embedded into one recommendation prompt.
pub const MAX_PROMPT_COLLABORATORS: usize = 5;

const UNSPECIFIED: &str = "not specified";

#[must_use]
pub fn trend_analysis(trend: &RawTrend) -> String {
    let keywords = trend.keywords.as_deref().unwrap_or_default().join(", ");
    format!(
        r#"As a cultural intelligence expert, analyze this trend:

Trend: {name}
Category: {category}
Region: {region}
Description: {description}
Keywords: {keywords}

Please provide a comprehensive analysis including:
1. Cultural significance and context
2. Sentiment analysis (POSITIVE/NEGATIVE/NEUTRAL)
3. Related cultural trends
4. Strategic recommendations for brands
5. Confidence level (0-1)

Format your response as JSON with the following structure:
{{
  "sentiment": "POSITIVE/NEGATIVE/NEUTRAL",
  "culturalContext": ["context1", "context2", "context3"],
  "trends": ["trend1", "trend2", "trend3"],
  "recommendations": ["rec1", "rec2", "rec3"],
  "confidence": 0.85,
  "analysis": "detailed analysis text",
  "culturalSignificance": "one-sentence significance"
}}"#,
        name = trend.name,
        category = trend.category.as_deref().unwrap_or(UNSPECIFIED),
        region = trend.region.as_deref().unwrap_or(UNSPECIFIED),
        description = trend.description.as_deref().unwrap_or(UNSPECIFIED),
    )
}

#[must_use]
pub fn persona_insights(form: &PersonaForm) -> String {
    let field = |v: &Option<String>| v.as_deref().unwrap_or(UNSPECIFIED).to_string();
    format!(
        r#"As a cultural anthropologist and marketing expert, create detailed insights for this persona:

Demographics:
- Age Range: {age_range}
- Region: {region}
- Industry: {industry}
- Target Market: {target_market}

Interests: {interests}
Values: {values}

Please provide:
1. Cultural influences and context
2. Media consumption patterns
3. Brand affinities and preferences
4. Communication style preferences
5. Pain points and motivations
6. Actionable marketing recommendations

Format as JSON:
{{
  "culturalContext": ["influence1", "influence2", "influence3"],
  "mediaConsumption": ["platform1", "platform2", "platform3"],
  "brandAffinities": ["brand1", "brand2", "brand3"],
  "communicationStyle": "description",
  "painPoints": ["pain1", "pain2", "pain3"],
  "motivations": ["motivation1", "motivation2"],
  "recommendations": ["rec1", "rec2", "rec3"],
  "culturalNuances": "detailed cultural insights"
}}"#,
        age_range = field(&form.age_range),
        region = field(&form.region),
        industry = field(&form.industry),
        target_market = field(&form.target_market),
        interests = field(&form.interests),
        values = field(&form.values),
    )
}

/// The one-line query describing an insight request's scope.
#[must_use]
pub fn insight_query(filters: &InsightFilters) -> String {
    let category = non_blank(filters.category.as_deref()).unwrap_or("all categories");
    let region = non_blank(filters.region.as_deref()).unwrap_or("global markets");
    format!("Cultural insights for {category} in {region}")
}

/// `context` is the serialized filters.
#[must_use]
pub fn cultural_insights(query: &str, context: &str) -> String {
    format!(
        r#"As a cultural intelligence analyst, provide insights for:

Query: {query}
Context: {context}

Analyze:
1. Current cultural movements and trends
2. Cross-cultural implications
3. Audience behavior patterns
4. Market opportunities
5. Strategic recommendations

Provide actionable insights that brands can use for:
- Content strategy
- Campaign development
- Market expansion
- Cultural localization

Format as JSON:
{{
  "title": "insight title",
  "description": "detailed description",
  "category": "category",
  "priority": "High/Medium/Low",
  "impact": "impact type",
  "actionItems": ["action1", "action2", "action3"],
  "metrics": {{
    "opportunitySize": "$X.XM",
    "confidence": "XX%",
    "timeline": "X-X months"
  }},
  "culturalSignificance": "explanation",
  "recommendations": ["rec1", "rec2"]
}}"#
    )
}

#[must_use]
pub fn trend_forecast(trend: &TrendRecord) -> String {
    format!(
        r#"As a trend forecasting expert, predict the evolution of this cultural trend:

Trend: {name}
Current Score: {score}
Category: {category}
Region: {region}
Keywords: {keywords}

Predict:
1. Growth trajectory over next 6-12 months
2. Geographic expansion patterns
3. Demographic adoption phases
4. Potential market disruptions
5. Strategic timing recommendations

Format as JSON:
{{
  "growthTrajectory": "description",
  "predictedScore": 95,
  "geographicExpansion": ["region1", "region2"],
  "demographicAdoption": {{
    "early": ["demo1", "demo2"],
    "mainstream": ["demo3", "demo4"]
  }},
  "marketDisruptions": ["disruption1", "disruption2"],
  "timingRecommendations": ["timing1", "timing2"],
  "confidence": 0.87
}}"#,
        name = trend.name,
        score = trend.score,
        category = trend.category,
        region = trend.region,
        keywords = trend.keywords.join(", "),
    )
}

/// `profile` and `collaborators` are pre-serialized JSON; the caller is
/// responsible for truncating to [`MAX_PROMPT_COLLABORATORS`].
#[must_use]
pub fn collaboration(profile: &str, collaborators: &str) -> String {
    format!(
        r#"As a collaboration strategist, recommend optimal partnerships:

User Profile: {profile}
Available Collaborators: {collaborators}

Analyze:
1. Cultural compatibility
2. Audience overlap and synergy
3. Creative potential
4. Market expansion opportunities
5. Risk assessment

Provide ranked recommendations with reasoning.

Format as JSON:
{{
  "recommendations": [
    {{
      "collaboratorId": "id",
      "matchScore": 95,
      "reasoning": "explanation",
      "opportunities": ["opp1", "opp2"],
      "culturalSynergy": "description"
    }}
  ],
  "strategicInsights": ["insight1", "insight2"],
  "marketOpportunities": ["market1", "market2"]
}}"#
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
