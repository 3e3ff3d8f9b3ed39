//! RetrievalEngine: orchestrates the full two-stage pipeline.
//!
//! Stage 1: embed query → score candidates → sort → keep top 2k.
//! Stage 2: lexical boost from completed courses → re-sort → keep top k.

use navio_core::config::RetrievalConfig;
use navio_core::constants::CANDIDATE_POOL_FACTOR;
use navio_core::errors::NavioResult;
use navio_core::models::RetrievalResult;
use navio_core::traits::{ICandidateStore, IEmbeddingClient};
use tracing::{debug, info};

use crate::rerank;
use crate::scorer;

/// The retrieval engine. Stateless and reentrant: each call owns its own
/// candidate list, nothing is cached across calls, and the store is
/// read-only from this component's perspective.
pub struct RetrievalEngine<'a> {
    embedder: &'a dyn IEmbeddingClient,
    store: &'a dyn ICandidateStore,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingClient,
        store: &'a dyn ICandidateStore,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    /// Retrieve the top-k catalog snippets grounding a recommendation for
    /// `program_id`.
    ///
    /// `query` falls back to a synthesized program query when absent or
    /// empty — the embedding provider is never called with an empty string.
    /// `k` falls back to the configured default when absent or zero.
    /// Collaborator failures propagate unchanged; an empty candidate pool is
    /// an empty result, not an error.
    pub fn retrieve(
        &self,
        program_id: &str,
        completed_courses: &[String],
        query: Option<&str>,
        k: Option<usize>,
    ) -> NavioResult<RetrievalResult> {
        let effective_k = match k {
            Some(k) if k >= 1 => k,
            _ => self.config.default_k,
        };

        let effective_query = match query {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => format!("course recommendations and requirements for {program_id}"),
        };

        let query_vector = self.embedder.embed(&effective_query)?;
        let items = self.store.fetch_by_program(program_id)?;

        if items.is_empty() {
            debug!(program = %program_id, "no candidates for program");
            return Ok(Vec::new());
        }

        let pool_size = items.len();

        // Stage 1: score, sort, keep the pre-rerank pool.
        let mut candidates = scorer::score_candidates(&query_vector, items);
        candidates.truncate(CANDIDATE_POOL_FACTOR * effective_k);

        debug!(
            program = %program_id,
            scored = pool_size,
            pooled = candidates.len(),
            "candidate pool built"
        );

        // Stage 2: lexical boost, re-sort, truncate to the final k.
        let mut result =
            rerank::boost_completed(candidates, completed_courses, self.config.rerank_boost);
        result.truncate(effective_k);

        info!(
            program = %program_id,
            results = result.len(),
            k = effective_k,
            "retrieval complete"
        );

        Ok(result)
    }
}
