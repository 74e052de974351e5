/// Generation Client — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the remote generation service
/// directly. All generation goes through `GenerationClient::generate`.
///
/// Failure policy is fail-soft: after the retry budget is spent the caller gets
/// an empty string, never an error.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

pub mod palm;
pub mod prompts;

/// Hard ceiling on output tokens, applied after caller overrides.
pub const HARD_MAX_OUTPUT_TOKENS: u32 = 512;
pub const DEFAULT_MODEL: &str = "models/text-bison-001";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 256;
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(800);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generation service returned empty content")]
    EmptyContent,

    #[error("Client setup error: {0}")]
    Client(String),
}

/// Process-wide generation settings. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationProfile {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationProfile {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// One fully resolved request handed to a completion backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// The remote text-completion capability.
///
/// `Ok(None)` and `Ok(Some(""))` both mean the service answered without text;
/// the client treats them like any other failed attempt.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, request: &GenerationRequest) -> Result<Option<String>, LlmError>;
}

/// Attempt budget and backoff schedule for `GenerationClient`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            initial_backoff: INITIAL_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Delay slept after failed attempt `attempt` (0-based). Doubles each time.
    fn backoff_after(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt)
    }
}

/// Wraps a `TextCompletion` backend with the fixed profile, token clamp and
/// retry/backoff. Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn TextCompletion>,
    profile: GenerationProfile,
    retry: RetryPolicy,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn TextCompletion>, profile: GenerationProfile) -> Self {
        Self {
            backend,
            profile,
            retry: RetryPolicy::default(),
        }
    }

    pub fn profile(&self) -> &GenerationProfile {
        &self.profile
    }

    /// Merges the profile with the caller's token override and clamps the
    /// result to `HARD_MAX_OUTPUT_TOKENS`.
    pub fn build_request(&self, prompt: &str, max_output_tokens: Option<u32>) -> GenerationRequest {
        let requested = max_output_tokens.unwrap_or(self.profile.max_output_tokens);
        GenerationRequest {
            prompt: prompt.to_string(),
            model: self.profile.model.clone(),
            temperature: self.profile.temperature,
            max_output_tokens: requested.min(HARD_MAX_OUTPUT_TOKENS),
        }
    }

    /// Generates text for `prompt`. Returns an empty string once every attempt
    /// has failed; never returns an error.
    pub async fn generate(&self, prompt: &str, max_output_tokens: Option<u32>) -> String {
        let request = self.build_request(prompt, max_output_tokens);
        let attempts = self.retry.max_attempts.max(1);

        for attempt in 0..attempts {
            let failure = match self.backend.complete(&request).await {
                Ok(Some(text)) if !text.is_empty() => {
                    debug!(
                        "Generation succeeded on attempt {}: {} chars",
                        attempt + 1,
                        text.len()
                    );
                    return text;
                }
                Ok(_) => LlmError::EmptyContent,
                Err(e) => e,
            };

            if attempt + 1 < attempts {
                let delay = self.retry.backoff_after(attempt);
                warn!(
                    "Generation attempt {}/{} failed ({}), retrying after {}ms...",
                    attempt + 1,
                    attempts,
                    failure,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            } else {
                error!(
                    "Generation failed after {} attempts ({}), returning empty result",
                    attempts, failure
                );
            }
        }

        String::new()
    }
}
