//! Data models shared across the workspace.

mod candidate;
mod course;
mod embedded_item;

pub use candidate::{RetrievalCandidate, RetrievalResult};
pub use course::Course;
pub use embedded_item::{EmbeddedItem, ItemKind};
