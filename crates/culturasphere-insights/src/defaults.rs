//! Every fallback value and lookup table the aggregation service uses.
//!
//! Kept in one place so the substitutions made on degraded paths are easy to
//! audit and change.

use culturasphere_core::{
    CulturalProfile, Demographics, Engagement, PersonaRecord, Psychographics, TrendRecord,
};
use rand::seq::IndexedRandom;

// ---------------------------------------------------------------------------
// Trend listing
// ---------------------------------------------------------------------------

pub const DEFAULT_TREND_CATEGORY: &str = "General";
pub const DEFAULT_TREND_REGION: &str = "Global";

/// Exclusive upper bounds for values derived when the source omits them.
pub const DERIVED_SCORE_BOUND: u16 = 100;
pub const DERIVED_CHANGE_BOUND: u16 = 20;
pub const DERIVED_GROWTH_BOUND: u16 = 30;

/// Trend list returned whenever a listing cannot be completed.
#[must_use]
pub fn mock_trends() -> Vec<TrendRecord> {
    vec![
        TrendRecord {
            id: "1".to_string(),
            name: "Sustainable Fashion".to_string(),
            category: "Fashion & Beauty".to_string(),
            region: "Europe".to_string(),
            score: 94,
            change: "+12%".to_string(),
            description: "Eco-friendly materials and ethical production gaining momentum"
                .to_string(),
            keywords: strings(&["sustainable", "eco-friendly", "ethical fashion"]),
            predicted_growth: "+25%".to_string(),
            cultural_significance: None,
            ai_analysis: None,
        },
        TrendRecord {
            id: "2".to_string(),
            name: "Plant-Based Alternatives".to_string(),
            category: "Food & Dining".to_string(),
            region: "North America".to_string(),
            score: 87,
            change: "+8%".to_string(),
            description: "Growing acceptance of plant-based proteins".to_string(),
            keywords: strings(&["plant-based", "vegan", "protein alternatives"]),
            predicted_growth: "+18%".to_string(),
            cultural_significance: None,
            ai_analysis: None,
        },
    ]
}

// ---------------------------------------------------------------------------
// Persona generation
// ---------------------------------------------------------------------------

pub const PERSONA_NAMES: [&str; 5] = [
    "Alex Chen",
    "Maya Rodriguez",
    "Jordan Kim",
    "Sam Taylor",
    "Riley Johnson",
];

pub const INCOMES: [&str; 5] = ["$45,000", "$65,000", "$85,000", "$105,000", "$125,000"];

pub const EDUCATIONS: [&str; 4] = [
    "Bachelor's Degree",
    "Master's Degree",
    "High School",
    "PhD",
];

pub const AGE_BRACKETS: [(&str, u32); 5] = [
    ("18-24", 21),
    ("25-34", 29),
    ("35-44", 39),
    ("45-54", 49),
    ("55+", 60),
];
pub const DEFAULT_AGE: u32 = 30;

pub const REGION_CITIES: [(&str, &str); 6] = [
    ("North America", "New York, NY"),
    ("Europe", "London, UK"),
    ("Asia Pacific", "Tokyo, Japan"),
    ("Latin America", "São Paulo, Brazil"),
    ("Middle East", "Dubai, UAE"),
    ("Africa", "Cape Town, South Africa"),
];
pub const DEFAULT_LOCATION: &str = "Global";

pub const INDUSTRY_OCCUPATIONS: [(&str, &str); 5] = [
    ("Technology", "Software Engineer"),
    ("Fashion & Beauty", "Brand Manager"),
    ("Entertainment", "Content Creator"),
    ("Healthcare", "Healthcare Professional"),
    ("Education", "Educator"),
];
pub const DEFAULT_OCCUPATION: &str = "Professional";

pub const DEFAULT_VALUES: [&str; 2] = ["Innovation", "Sustainability"];
pub const DEFAULT_INTERESTS: [&str; 2] = ["Technology", "Travel"];
pub const DEFAULT_PAIN_POINTS: [&str; 2] = ["Time management", "Information overload"];
pub const DEFAULT_GOALS: [&str; 2] = ["Career advancement", "Work-life balance"];
pub const DEFAULT_INFLUENCES: [&str; 2] = ["Global Digital Culture", "Urban Professional Values"];
pub const DEFAULT_MEDIA_CONSUMPTION: [&str; 3] = ["Social Media", "Streaming", "Podcasts"];
pub const DEFAULT_SHOPPING_BEHAVIOR: &str = "Research-driven, values quality";
pub const DEFAULT_BRAND_AFFINITIES: [&str; 2] = ["Apple", "Nike"];
pub const DEFAULT_CHANNELS: [&str; 2] = ["Instagram", "LinkedIn"];
pub const DEFAULT_CONTENT_TYPES: [&str; 2] = ["Visual content", "Educational content"];
pub const DEFAULT_COMMUNICATION_STYLE: &str = "Authentic, informative";

#[must_use]
pub fn default_demographics() -> Demographics {
    Demographics {
        lifestyle: "Urban Professional".to_string(),
        family_status: "Single".to_string(),
        tech_savviness: "High".to_string(),
    }
}

/// Age for an age-range label such as `"25-34"`; unknown labels give 30.
#[must_use]
pub fn age_for_bracket(age_range: Option<&str>) -> u32 {
    lookup(&AGE_BRACKETS, age_range).unwrap_or(DEFAULT_AGE)
}

#[must_use]
pub fn location_for_region(region: Option<&str>) -> &'static str {
    lookup(&REGION_CITIES, region).unwrap_or(DEFAULT_LOCATION)
}

#[must_use]
pub fn occupation_for_industry(industry: Option<&str>) -> &'static str {
    lookup(&INDUSTRY_OCCUPATIONS, industry).unwrap_or(DEFAULT_OCCUPATION)
}

fn lookup<T: Copy>(table: &[(&str, T)], key: Option<&str>) -> Option<T> {
    let key = key?;
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Uniformly pick one entry from a non-empty pool.
#[must_use]
pub fn pick(pool: &[&'static str]) -> &'static str {
    pool.choose(&mut rand::rng()).copied().unwrap_or_default()
}

#[must_use]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Persona returned whenever generation cannot be completed.
#[must_use]
pub fn mock_persona() -> PersonaRecord {
    PersonaRecord {
        name: "Alex Chen".to_string(),
        age: 28,
        location: "San Francisco, CA".to_string(),
        occupation: "UX Designer".to_string(),
        income: "$85,000".to_string(),
        education: "Bachelor's in Design".to_string(),
        demographics: default_demographics(),
        psychographics: Psychographics {
            values: strings(&["Innovation", "Sustainability"]),
            interests: strings(&["Design", "Technology"]),
            pain_points: strings(&["Time management"]),
            goals: strings(&["Career advancement"]),
        },
        cultural_profile: CulturalProfile {
            influences: strings(&["Minimalism", "Tech Culture"]),
            media_consumption: strings(&["Instagram", "Design blogs"]),
            shopping_behavior: "Research-driven".to_string(),
            brand_affinities: strings(&["Apple", "Patagonia"]),
        },
        engagement: Engagement {
            preferred_channels: strings(&["Instagram", "LinkedIn"]),
            content_types: strings(&["Visual content"]),
            communication_style: "Authentic".to_string(),
        },
        ai_insights: None,
    }
}
