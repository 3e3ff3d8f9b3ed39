//! CatalogStore: program-scoped item and course storage.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use navio_core::constants::MAX_BULK_BATCH_SIZE;
use navio_core::errors::{CatalogError, NavioResult};
use navio_core::models::{Course, EmbeddedItem, ItemKind};
use navio_core::traits::{ICandidateStore, ICourseCatalog};
use tracing::{debug, info};
use uuid::Uuid;

/// An item submitted for ingestion. `id` is optional — the store assigns a
/// UUID when absent.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: Option<String>,
    pub program_id: String,
    pub kind: ItemKind,
    pub text: String,
    pub vector: Vec<f32>,
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone)]
struct StoredItem {
    item: EmbeddedItem,
    ingested_at: DateTime<Utc>,
}

/// In-memory candidate store and course catalog.
///
/// Items and courses live in concurrent maps keyed by program id. All
/// vectors share the dimension fixed at construction; ingestion rejects
/// violations with `CatalogError::DimensionMismatch`.
pub struct CatalogStore {
    dimensions: usize,
    items: DashMap<String, Vec<StoredItem>>,
    courses: DashMap<String, Vec<Course>>,
}

impl CatalogStore {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            items: DashMap::new(),
            courses: DashMap::new(),
        }
    }

    /// Ingest one embedded item, returning its id.
    ///
    /// Validates `vector.len()` against the store dimension — the only place
    /// this invariant is enforced, which is what lets query-time scoring
    /// trust stored vectors.
    pub fn ingest(&self, new: NewItem) -> NavioResult<String> {
        if new.vector.len() != self.dimensions {
            return Err(CatalogError::DimensionMismatch {
                expected: self.dimensions,
                actual: new.vector.len(),
            }
            .into());
        }

        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let item = EmbeddedItem {
            id: id.clone(),
            program_id: new.program_id.clone(),
            kind: new.kind,
            text: new.text,
            vector: new.vector,
            metadata: new.metadata,
        };

        debug!(program = %new.program_id, id = %id, "ingested catalog item");

        self.items.entry(new.program_id).or_default().push(StoredItem {
            item,
            ingested_at: Utc::now(),
        });

        Ok(id)
    }

    /// Ingest a batch of items, returning their ids in input order.
    ///
    /// Fails fast: a dimension violation rejects the offending item and
    /// everything after it; earlier items stay ingested.
    pub fn ingest_bulk(&self, batch: Vec<NewItem>) -> NavioResult<Vec<String>> {
        if batch.len() > MAX_BULK_BATCH_SIZE {
            return Err(CatalogError::BatchTooLarge {
                size: batch.len(),
                max: MAX_BULK_BATCH_SIZE,
            }
            .into());
        }

        let count = batch.len();
        let mut ids = Vec::with_capacity(count);
        for new in batch {
            ids.push(self.ingest(new)?);
        }

        info!(items = count, "bulk ingestion complete");
        Ok(ids)
    }

    /// Register a course row for the search path.
    pub fn add_course(&self, course: Course) {
        self.courses
            .entry(course.program_id.clone())
            .or_default()
            .push(course);
    }

    /// Total embedded items across all programs.
    pub fn item_count(&self) -> usize {
        self.items.iter().map(|entry| entry.value().len()).sum()
    }

    /// Number of programs with at least one embedded item.
    pub fn program_count(&self) -> usize {
        self.items.len()
    }

    /// The vector dimension this store enforces.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// When the program's catalog was last seeded, if ever. Used by the
    /// seeding pipeline to decide whether a program needs a refresh.
    pub fn last_ingested_at(&self, program_id: &str) -> Option<DateTime<Utc>> {
        self.items
            .get(program_id)
            .and_then(|entry| entry.value().iter().map(|s| s.ingested_at).max())
    }
}

impl ICandidateStore for CatalogStore {
    fn fetch_by_program(&self, program_id: &str) -> NavioResult<Vec<EmbeddedItem>> {
        Ok(self
            .items
            .get(program_id)
            .map(|entry| entry.value().iter().map(|s| s.item.clone()).collect())
            .unwrap_or_default())
    }
}

impl ICourseCatalog for CatalogStore {
    fn course_by_code(&self, program_id: &str, code: &str) -> NavioResult<Option<Course>> {
        let courses = self.courses.get(program_id).ok_or_else(|| {
            CatalogError::ProgramNotFound {
                program_id: program_id.to_string(),
            }
        })?;
        Ok(courses.value().iter().find(|c| c.code == code).cloned())
    }

    fn search_courses(
        &self,
        program_id: &str,
        query: &str,
        limit: usize,
    ) -> NavioResult<Vec<Course>> {
        let courses = self.courses.get(program_id).ok_or_else(|| {
            CatalogError::ProgramNotFound {
                program_id: program_id.to_string(),
            }
        })?;

        let needle = query.to_lowercase();
        Ok(courses
            .value()
            .iter()
            .filter(|c| {
                c.code.to_lowercase().contains(&needle)
                    || c.title.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
