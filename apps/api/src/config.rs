use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::taxonomy::prompt_builder::PromptProfile;

/// Application configuration loaded from environment variables.
/// Every variable has a default except the API key, which may be absent:
/// the service then starts but rejects attribute generation requests.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub prompt_profile: PromptProfile,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_path: PathBuf::from(env_or("DATABASE_PATH", "hs_attributes.db")),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            prompt_profile: env_or("PROMPT_PROFILE", PromptProfile::default().as_str())
                .parse::<PromptProfile>()
                .map_err(|e| anyhow!(e))
                .context("PROMPT_PROFILE must be 'drop_irrelevant' or 'generalize'")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Unset and blank variables both count as missing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
