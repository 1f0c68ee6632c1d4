mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "culturasphere")]
#[command(about = "CulturaSphere cultural intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List trending topics with generated analysis
    Trends {
        /// Restrict to a category (e.g. "Music")
        #[arg(long)]
        category: Option<String>,
        /// Restrict to a region (e.g. "Europe")
        #[arg(long)]
        region: Option<String>,
    },
    /// Generate an audience persona
    Persona(PersonaArgs),
    /// Generate actionable cultural insights
    Insights {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    /// Forecast how a trend evolves; prints `null` when no forecast is available
    Forecast {
        /// YAML or JSON trend record
        #[arg(long)]
        trend_file: PathBuf,
    },
    /// Recommend collaboration partners for a profile
    Collaborate {
        /// YAML or JSON profile document
        #[arg(long)]
        profile: PathBuf,
        /// YAML or JSON list of candidate collaborators
        #[arg(long)]
        collaborators: PathBuf,
    },
    /// Ask the trend source for raw cultural insights on a query
    SourceInsights { query: String },
    /// Fetch raw recommendations for a user from the trend source
    Recommend {
        user_id: String,
        /// YAML or JSON context document; defaults to `{}`
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Search the trend source's cultural content
    Search {
        query: String,
        /// YAML or JSON filter document; defaults to `{}`
        #[arg(long)]
        filters: Option<PathBuf>,
    },
    /// Analyse a trend with the text-generation model; prints `null` on failure
    AnalyzeTrend {
        /// YAML or JSON trend record
        #[arg(long)]
        trend_file: PathBuf,
    },
    /// Extract cultural phrases generated for a persona description
    PersonaText(PersonaArgs),
    /// Classify the sentiment of a piece of text
    Sentiment { text: String },
    /// Zero-shot classify text against candidate labels
    Classify {
        text: String,
        /// Comma-separated candidate labels
        #[arg(long, value_delimiter = ',', required = true)]
        labels: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct PersonaArgs {
    /// Age bracket: 18-24, 25-34, 35-44, 45-54 or 55+
    #[arg(long)]
    age_range: Option<String>,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    target_market: Option<String>,
    /// Comma-separated interests
    #[arg(long)]
    interests: Option<String>,
    /// Comma-separated values
    #[arg(long)]
    values: Option<String>,
}

impl From<PersonaArgs> for culturasphere_core::PersonaForm {
    fn from(args: PersonaArgs) -> Self {
        Self {
            age_range: args.age_range,
            region: args.region,
            industry: args.industry,
            target_market: args.target_market,
            interests: args.interests,
            values: args.values,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = culturasphere_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, command = ?cli.command, "starting");

    match cli.command {
        Commands::Trends { category, region } => {
            commands::run_trends(&config, category.as_deref(), region.as_deref()).await
        }
        Commands::Persona(args) => commands::run_persona(&config, &args.into()).await,
        Commands::Insights { category, region } => {
            let filters = culturasphere_core::InsightFilters { category, region };
            commands::run_insights(&config, &filters).await
        }
        Commands::Forecast { trend_file } => commands::run_forecast(&config, &trend_file).await,
        Commands::Collaborate {
            profile,
            collaborators,
        } => commands::run_collaborate(&config, &profile, &collaborators).await,
        Commands::SourceInsights { query } => commands::run_source_insights(&config, &query).await,
        Commands::Recommend { user_id, context } => {
            commands::run_recommend(&config, &user_id, context.as_deref()).await
        }
        Commands::Search { query, filters } => {
            commands::run_search(&config, &query, filters.as_deref()).await
        }
        Commands::AnalyzeTrend { trend_file } => {
            commands::run_analyze_trend(&config, &trend_file).await
        }
        Commands::PersonaText(args) => commands::run_persona_text(&config, &args.into()).await,
        Commands::Sentiment { text } => commands::run_sentiment(&config, &text).await,
        Commands::Classify { text, labels } => {
            commands::run_classify(&config, &text, &labels).await
        }
    }
}

#[cfg(test)]
mod tests;
