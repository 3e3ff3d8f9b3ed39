//! # navio-retrieval
//!
//! The retrieval and re-ranking engine: turns a student query plus program
//! context into an ordered set of catalog/requirement snippets used as
//! grounding context for recommendation generation.
//!
//! Two-stage pipeline, each stage a pure function composed by the engine:
//! score-and-sort ([`scorer::score_candidates`]) builds the candidate pool,
//! boost-and-resort ([`rerank::boost_completed`]) promotes items whose text
//! mentions a completed course. The engine is stateless and reentrant —
//! nothing is cached between calls.

pub mod engine;
pub mod rerank;
pub mod scorer;
pub mod snippets;

pub use engine::RetrievalEngine;
