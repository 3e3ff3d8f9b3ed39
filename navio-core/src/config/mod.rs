//! Workspace configuration, loaded from TOML.
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a working configuration; partial TOML overrides only the
//! fields it names.

mod defaults;
mod embedding_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{NavioError, NavioResult};

/// Top-level configuration for the Navio backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavioConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
}

impl NavioConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(input: &str) -> NavioResult<Self> {
        toml::from_str(input).map_err(|e| NavioError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> NavioResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NavioError::ConfigError {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }
}
