use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider selector: "openai" or "hashed".
    pub provider: String,
    /// Base URL of the OpenAI-compatible embeddings API.
    pub base_url: String,
    /// Environment variable holding the API key. The key itself never
    /// lives in a config file.
    pub api_key_env: String,
    /// Model identifier, passed through opaquely to the provider.
    pub model: String,
    /// Expected vector dimension `D`. Every vector in the deployment —
    /// stored or query — must have this length.
    pub dimensions: usize,
    /// HTTP timeout for a single embedding call.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            base_url: defaults::DEFAULT_EMBEDDING_BASE_URL.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_API_KEY_ENV.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
