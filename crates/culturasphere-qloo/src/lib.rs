//! Client for the Qloo cultural trend and persona signal API.

pub mod client;
pub mod error;
pub mod types;

pub use client::QlooClient;
pub use error::QlooError;
pub use types::{
    InsightsRequest, PersonaSeed, PersonaSeedRequest, RawTrend, RecommendationsRequest,
    SearchRequest, SeedDemographics, SeedPreferences, SeedProfile, TrendsResponse,
};
