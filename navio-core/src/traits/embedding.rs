use crate::errors::NavioResult;

/// Embedding generation provider.
pub trait IEmbeddingClient: Send + Sync {
    /// Embed a single text, returning a vector of exactly `dimensions()`
    /// floats. Fails with `EmbeddingError` when the provider is unreachable,
    /// returns malformed data, or returns a wrong-length vector. No internal
    /// retry — retries, if any, belong to the caller.
    fn embed(&self, text: &str) -> NavioResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this client.
    fn dimensions(&self) -> usize;

    /// Human-readable client name.
    fn name(&self) -> &str;
}
