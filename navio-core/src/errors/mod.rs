//! Error taxonomy for the Navio workspace.
//!
//! Per-subsystem enums aggregate into `NavioError` via `From` impls.
//! Collaborator failures (embedding provider, catalog store) propagate
//! unchanged through the retrieval path — no internal retries, no wrapping.

mod catalog_error;
mod embedding_error;

pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;

/// Top-level error for all Navio operations.
#[derive(Debug, thiserror::Error)]
pub enum NavioError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Workspace-wide result alias.
pub type NavioResult<T> = Result<T, NavioError>;
