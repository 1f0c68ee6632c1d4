//! Persona assembly from the form, the source seed, and optional insights.

use culturasphere_core::{
    CulturalProfile, Engagement, PersonaForm, PersonaInsights, PersonaRecord, Psychographics,
};
use culturasphere_qloo::{PersonaSeed, SeedDemographics};

use crate::defaults::{
    self, age_for_bracket, location_for_region, occupation_for_industry, pick, strings,
};

/// Demographic filters forwarded to the source for a form.
pub(crate) fn seed_demographics(form: &PersonaForm) -> SeedDemographics {
    SeedDemographics {
        age: form.age_range.clone(),
        region: form.region.clone(),
        industry: form.industry.clone(),
    }
}

pub(crate) fn assemble(
    form: &PersonaForm,
    seed: PersonaSeed,
    insights: Option<PersonaInsights>,
) -> PersonaRecord {
    let values = non_empty_or(form.value_tokens(), &defaults::DEFAULT_VALUES);
    let interests = non_empty_or(form.interest_tokens(), &defaults::DEFAULT_INTERESTS);
    let brand_affinities = non_empty_or(
        seed.preferences.brands,
        &defaults::DEFAULT_BRAND_AFFINITIES,
    );
    let influences = non_empty_or(
        insights
            .as_ref()
            .map(|i| i.cultural_context.clone())
            .unwrap_or_default(),
        &defaults::DEFAULT_INFLUENCES,
    );

    PersonaRecord {
        name: pick(&defaults::PERSONA_NAMES).to_string(),
        age: age_for_bracket(form.age_range.as_deref()),
        location: location_for_region(form.region.as_deref()).to_string(),
        occupation: occupation_for_industry(form.industry.as_deref()).to_string(),
        income: pick(&defaults::INCOMES).to_string(),
        education: pick(&defaults::EDUCATIONS).to_string(),
        demographics: defaults::default_demographics(),
        psychographics: Psychographics {
            values,
            interests,
            pain_points: strings(&defaults::DEFAULT_PAIN_POINTS),
            goals: strings(&defaults::DEFAULT_GOALS),
        },
        cultural_profile: CulturalProfile {
            influences,
            media_consumption: strings(&defaults::DEFAULT_MEDIA_CONSUMPTION),
            shopping_behavior: defaults::DEFAULT_SHOPPING_BEHAVIOR.to_string(),
            brand_affinities,
        },
        engagement: Engagement {
            preferred_channels: strings(&defaults::DEFAULT_CHANNELS),
            content_types: strings(&defaults::DEFAULT_CONTENT_TYPES),
            communication_style: defaults::DEFAULT_COMMUNICATION_STYLE.to_string(),
        },
        ai_insights: insights,
    }
}

fn non_empty_or(items: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if items.is_empty() {
        strings(fallback)
    } else {
        items
    }
}
