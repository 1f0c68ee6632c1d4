//! Keyword-phrase extraction from generated prose.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static CULTURAL_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cultural?\s+\w+").expect("valid regex"));
static TRENDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)trend\w*\s+\w+").expect("valid regex"));
static RECOMMENDATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recommend\w*\s+[\w\s]+").expect("valid regex"));
static SIGNIFICANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)significance[\w\s:]+").expect("valid regex"));

const MAX_CONTEXT: usize = 5;
const MAX_TRENDS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 3;
const MAX_SIGNIFICANCE_CHARS: usize = 200;

#[must_use]
pub fn extract_cultural_context(text: &str) -> Vec<String> {
    unique_matches(&CULTURAL_CONTEXT, text, MAX_CONTEXT)
}

#[must_use]
pub fn extract_trends(text: &str) -> Vec<String> {
    unique_matches(&TRENDS, text, MAX_TRENDS)
}

#[must_use]
pub fn extract_recommendations(text: &str) -> Vec<String> {
    unique_matches(&RECOMMENDATIONS, text, MAX_RECOMMENDATIONS)
}

/// First "significance ..." phrase, cut to 200 characters.
#[must_use]
pub fn extract_cultural_significance(text: &str) -> String {
    SIGNIFICANCE
        .find(text)
        .map(|m| m.as_str().chars().take(MAX_SIGNIFICANCE_CHARS).collect())
        .unwrap_or_default()
}

/// Distinct matches in order of first appearance, capped at `limit`.
fn unique_matches(re: &Regex, text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|s| seen.insert(s.clone()))
        .take(limit)
        .collect()
}
