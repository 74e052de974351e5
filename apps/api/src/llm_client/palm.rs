//! HTTP backend for the Generative Language `generateText` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{GenerationRequest, LlmError, TextCompletion};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta2";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateTextRequest<'a> {
    prompt: TextPrompt<'a>,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct TextPrompt<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateTextResponse {
    #[serde(default)]
    candidates: Vec<TextCompletionCandidate>,
}

#[derive(Debug, Deserialize)]
struct TextCompletionCandidate {
    output: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// `TextCompletion` over HTTP. One request per call, no retries here;
/// `GenerationClient` owns the retry policy.
pub struct PalmCompletion {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PalmCompletion {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Client(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}/{}:generateText", self.base_url, API_VERSION, model)
    }
}

#[async_trait]
impl TextCompletion for PalmCompletion {
    async fn complete(&self, request: &GenerationRequest) -> Result<Option<String>, LlmError> {
        let body = GenerateTextRequest {
            prompt: TextPrompt {
                text: &request.prompt,
            },
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        };

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateTextResponse = serde_json::from_str(&body)?;
        debug!(
            "Generation API returned {} candidate(s)",
            parsed.candidates.len()
        );

        Ok(parsed
            .candidates
            .into_iter()
            .find_map(|candidate| candidate.output))
    }
}
