use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
///
/// Every variable has a default: the pure analysis path must run without any
/// environment, and the generation settings only matter when the rewrite
/// path is used.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Ollama-style generation endpoint.
    pub ollama_url: String,
    /// Model name sent with each generation request.
    pub generation_model: String,
    /// Request timeout for the single blocking generation call.
    pub generation_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", "http://localhost:11434"),
            generation_model: env_or("GENERATION_MODEL", "mistral"),
            generation_timeout_secs: env_or("GENERATION_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("GENERATION_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
