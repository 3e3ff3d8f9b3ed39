//! OpenAI-compatible embeddings provider.
//!
//! Speaks the `/embeddings` wire format over blocking HTTP. Any server
//! implementing that contract works — the base URL and model id come from
//! config, the API key from the environment.

use std::time::Duration;

use navio_core::config::EmbeddingConfig;
use navio_core::errors::{EmbeddingError, NavioResult};
use navio_core::traits::IEmbeddingClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Blocking HTTP client for an OpenAI-compatible embeddings endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

impl OpenAiClient {
    /// Build a client from config, resolving the API key from the
    /// environment variable named in `config.api_key_env`.
    pub fn new(config: &EmbeddingConfig) -> NavioResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            EmbeddingError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            }
        })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ProviderUnreachable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            endpoint: format!("{}/embeddings", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
            dimensions: config.dimensions,
        })
    }

    /// Validate a decoded response body and extract the vector.
    ///
    /// Split out from the HTTP path so the wire-format checks are testable
    /// without a live endpoint.
    fn extract_vector(&self, response: EmbeddingResponse) -> NavioResult<Vec<f32>> {
        let vector = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::MalformedResponse {
                reason: "response carried no embedding data".to_string(),
            })?;

        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        Ok(vector)
    }
}

impl IEmbeddingClient for OpenAiClient {
    fn embed(&self, text: &str) -> NavioResult<Vec<f32>> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| EmbeddingError::ProviderUnreachable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::ProviderUnreachable {
                reason: format!("provider returned {status}: {body}"),
            }
            .into());
        }

        let decoded: EmbeddingResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        debug!(model = %self.model, chars = text.len(), "embedded query text");

        self.extract_vector(decoded)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "openai"
    }
}
