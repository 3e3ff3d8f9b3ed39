use serde::{Deserialize, Serialize};

use super::EmbeddedItem;

/// A scored candidate: an `EmbeddedItem` plus its cosine distance from the
/// query vector. Transient — lives for one retrieval call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalCandidate {
    pub item: EmbeddedItem,
    /// Cosine distance, possibly reduced by the lexical boost. Always >= 0.
    pub distance: f64,
}

/// Final ordered result of one retrieval call: ascending by (boosted)
/// distance, ties kept in prior order, length at most the requested `k`.
pub type RetrievalResult = Vec<RetrievalCandidate>;
