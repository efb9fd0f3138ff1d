use anyhow::{Context, Result};

/// Default number of movies the taste-profile action asks the model for.
pub const DEFAULT_RECOMMENDATION_COUNT: u32 = 6;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// When unset, watchlists live in process memory and vanish on restart.
    pub redis_url: Option<String>,
    pub recommendation_count: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            redis_url: optional_env("REDIS_URL"),
            recommendation_count: optional_env("RECOMMENDATION_COUNT")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("RECOMMENDATION_COUNT must be a positive integer")?
                .unwrap_or(DEFAULT_RECOMMENDATION_COUNT),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
