/// Catalog store errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An ingested vector did not match the configured dimension.
    /// Enforced at ingestion time so query-time scoring never sees a
    /// wrong-length stored vector.
    #[error("dimension mismatch at ingestion: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("program not found: {program_id}")]
    ProgramNotFound { program_id: String },

    #[error("bulk batch too large: {size} items (max {max})")]
    BatchTooLarge { size: usize, max: usize },
}
