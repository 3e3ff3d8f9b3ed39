//! # navio-embeddings
//!
//! Embedding client implementations behind `IEmbeddingClient`.
//!
//! Two providers: an OpenAI-compatible HTTP client for production and a
//! deterministic hashed term-frequency client for offline use, seeding dry
//! runs, and tests. Provider selection is config-driven via
//! [`providers::create_client`].

pub mod providers;

pub use providers::{create_client, HashedTfClient, OpenAiClient};
