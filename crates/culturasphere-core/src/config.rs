use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_QLOO_API_URL: &str = "https://hackathon.api.qloo.com";
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
pub const DEFAULT_HUGGINGFACE_API_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_USER_AGENT: &str = "culturasphere/0.1 (cultural-intelligence)";
pub const DEFAULT_GEMINI_TEMPERATURE: &str = "0.7";
pub const DEFAULT_GEMINI_MAX_OUTPUT_TOKENS: &str = "1024";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Credentials are optional here; each client checks for its own key.
    let optional =
        |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.trim().is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_unit_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is outside 0.0..=1.0"),
            })
        }
    };

    let env = parse_environment(&or_default("CULTURASPHERE_ENV", "development"))?;
    let log_level = or_default("CULTURASPHERE_LOG_LEVEL", "info");

    let qloo_api_url = or_default("QLOO_API_URL", DEFAULT_QLOO_API_URL);
    let qloo_api_key = optional("QLOO_API_KEY");
    let gemini_api_url = or_default("GEMINI_API_URL", DEFAULT_GEMINI_API_URL);
    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_temperature = parse_unit_f32("GEMINI_TEMPERATURE", DEFAULT_GEMINI_TEMPERATURE)?;
    let gemini_max_output_tokens =
        parse_u32("GEMINI_MAX_OUTPUT_TOKENS", DEFAULT_GEMINI_MAX_OUTPUT_TOKENS)?;
    let huggingface_api_url = or_default("HUGGINGFACE_API_URL", DEFAULT_HUGGINGFACE_API_URL);
    let huggingface_api_key = optional("HUGGINGFACE_API_KEY");

    let request_timeout_secs = parse_u64("CULTURASPHERE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CULTURASPHERE_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        log_level,
        qloo_api_url,
        qloo_api_key,
        gemini_api_url,
        gemini_api_key,
        gemini_temperature,
        gemini_max_output_tokens,
        huggingface_api_url,
        huggingface_api_key,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CULTURASPHERE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
