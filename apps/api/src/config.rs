use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::dispatch::DEFAULT_MAX_CONCURRENCY;
use crate::llm_client::palm::DEFAULT_API_URL;
use crate::llm_client::{GenerationProfile, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation_api_key: String,
    pub generation_api_url: String,
    pub generation_model: String,
    pub generation_temperature: f32,
    pub generation_timeout: Duration,
    pub max_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generation_api_key: require_env("GENERATION_API_KEY")?,
            generation_api_url: env_or("GENERATION_API_URL", DEFAULT_API_URL),
            generation_model: env_or("GENERATION_MODEL", DEFAULT_MODEL),
            generation_temperature: parse_env("GENERATION_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            generation_timeout: Duration::from_secs(parse_env("GENERATION_TIMEOUT_SECS", 120u64)?),
            max_concurrency: parse_env("DISPATCH_MAX_CONCURRENCY", DEFAULT_MAX_CONCURRENCY)?,
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The immutable generation profile handed to `GenerationClient`.
    pub fn generation_profile(&self) -> GenerationProfile {
        GenerationProfile {
            model: self.generation_model.clone(),
            temperature: self.generation_temperature,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
