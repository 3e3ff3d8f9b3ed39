use crate::errors::NavioResult;
use crate::models::EmbeddedItem;

/// Source of embedded candidates for one program.
pub trait ICandidateStore: Send + Sync {
    /// All items for the program, every kind, in no guaranteed order — the
    /// retrieval engine re-sorts. An unknown program yields an empty vec,
    /// not an error.
    fn fetch_by_program(&self, program_id: &str) -> NavioResult<Vec<EmbeddedItem>>;
}
