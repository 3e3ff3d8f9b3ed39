//! Snippet projection for prompt assembly.

use navio_core::models::RetrievalResult;

/// Project each candidate's stored text verbatim, preserving rank order.
/// No truncation, deduplication, or content modification — downstream
/// prompt assembly owns any further formatting.
pub fn format_snippets(result: &RetrievalResult) -> Vec<String> {
    result.iter().map(|c| c.item.text.clone()).collect()
}
