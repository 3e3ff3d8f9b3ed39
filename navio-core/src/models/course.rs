use serde::{Deserialize, Serialize};

/// A catalog course row, used by the course-search path.
///
/// The retrieval engine never touches this type — it works on `EmbeddedItem`
/// only. Courses back the code/title search that the advising frontend uses
/// for autocomplete and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub program_id: String,
    pub code: String,
    pub title: String,
    pub credits: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prereqs: Vec<String>,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source_url: String,
}
