//! LLM Client — the single point of entry for generative-service calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the generation endpoint
//! directly. The service is a capability behind [`GenerativeClient`] so tests
//! substitute a fixed-text stub without touching orchestration code.
//!
//! No internal retry: the service's output is high-latency and
//! possibly truncated, so a retried call may return materially different
//! text. Retry policy belongs to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("service returned an empty response")]
    EmptyResponse,
}

/// Sampling options for a single generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Capability trait for the external generative service.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// One synchronous (non-streaming) request/response generation call.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerationOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// HTTP client for an Ollama-style `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Builds a client with an explicit request timeout. The generation call
    /// is the only blocking operation in the pipeline, so the timeout bounds
    /// the whole rewrite path.
    pub fn new(base_url: String, model: String, timeout_secs: u64) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url,
            model,
        })
    }
}

#[async_trait]
impl GenerativeClient for OllamaClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options,
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: GenerateResponse = response.json().await?;
        if body.response.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        debug!(chars = body.response.len(), "generation call succeeded");
        Ok(body.response)
    }
}
