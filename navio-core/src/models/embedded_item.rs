use serde::{Deserialize, Serialize};

/// Kind of catalog knowledge an `EmbeddedItem` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Course,
    Requirement,
}

/// One indexed unit of catalog knowledge: the embedded text plus its vector.
///
/// `text` is the exact string that was embedded; re-embedding replaces both
/// fields together. `metadata` is an opaque bag (course code, requirement id,
/// source URL) carried verbatim and never interpreted by the retrieval engine.
///
/// Invariant: `vector.len()` equals the deployment dimension `D` for every
/// item in a store. The catalog enforces this at ingestion, so scoring never
/// sees a wrong-length stored vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedItem {
    pub id: String,
    pub program_id: String,
    pub kind: ItemKind,
    pub text: String,
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}
