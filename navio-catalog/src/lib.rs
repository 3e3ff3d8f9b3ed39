//! # navio-catalog
//!
//! In-memory implementation of `ICandidateStore` and `ICourseCatalog`.
//!
//! Holds embedded catalog items keyed by program, validating vector
//! dimensions at ingestion so the retrieval path never sees a wrong-length
//! stored vector. Read-mostly: `retrieve` never mutates, so concurrent
//! retrieval runs without contention.

pub mod store;

pub use store::{CatalogStore, NewItem};
