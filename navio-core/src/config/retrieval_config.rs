use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Result size when the caller omits `k`.
    pub default_k: usize,
    /// Distance reduction per completed-course substring match.
    pub rerank_boost: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_k: defaults::DEFAULT_K,
            rerank_boost: defaults::DEFAULT_RERANK_BOOST,
        }
    }
}
