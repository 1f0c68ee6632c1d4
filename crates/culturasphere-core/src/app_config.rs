#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings read once at startup.
///
/// Holds the credential/URL pairs for the three upstream services plus HTTP
/// client tuning. Credentials are optional here; each client checks for its
/// own key when it is built.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub qloo_api_url: String,
    pub qloo_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_api_key: Option<String>,
    /// Sampling temperature in `[0.0, 1.0]`.
    pub gemini_temperature: f32,
    pub gemini_max_output_tokens: u32,
    pub huggingface_api_url: String,
    pub huggingface_api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("qloo_api_url", &self.qloo_api_url)
            .field("qloo_api_key", &redacted(self.qloo_api_key.as_deref()))
            .field("gemini_api_url", &self.gemini_api_url)
            .field("gemini_api_key", &redacted(self.gemini_api_key.as_deref()))
            .field("gemini_temperature", &self.gemini_temperature)
            .field("gemini_max_output_tokens", &self.gemini_max_output_tokens)
            .field("huggingface_api_url", &self.huggingface_api_url)
            .field(
                "huggingface_api_key",
                &redacted(self.huggingface_api_key.as_deref()),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn redacted(secret: Option<&str>) -> Option<&'static str> {
    secret.map(|_| "[redacted]")
}
