//! Shared configuration and record types for the CulturaSphere aggregation core.

pub mod app_config;
pub mod collaboration;
pub mod config;
pub mod documents;
pub mod insights;
pub mod personas;
pub mod trends;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use collaboration::{CollaborationPlan, CollaboratorMatch};
pub use config::{load_app_config, load_app_config_from_env};
pub use documents::load_document;
pub use insights::{CulturalInsightRecord, InsightFilters, InsightMetrics, Priority};
pub use personas::{
    CulturalProfile, Demographics, Engagement, PersonaForm, PersonaInsights, PersonaRecord,
    Psychographics,
};
pub use trends::{AiAnalysis, DemographicAdoption, Sentiment, TrendForecast, TrendRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read document {path}: {source}")]
    DocumentIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document {path}: {source}")]
    DocumentParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
