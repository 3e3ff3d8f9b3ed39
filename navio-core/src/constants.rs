/// Navio system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pre-rerank candidate pool factor: the scorer keeps `factor * k`
/// candidates so the lexical booster has headroom to promote
/// lower-ranked exact matches into the final top-k.
pub const CANDIDATE_POOL_FACTOR: usize = 2;

/// Maximum batch size for bulk ingestion.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;
