/// Embedding provider errors.
///
/// Raised when the external provider is unreachable, returns malformed
/// data, or returns a vector of the wrong dimension. Never raised for
/// query-vs-candidate dimension mismatches — those degrade ranking
/// silently at scoring time.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("provider unreachable: {reason}")]
    ProviderUnreachable { reason: String },

    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("missing API key: environment variable {env_var} is not set")]
    MissingApiKey { env_var: String },
}
