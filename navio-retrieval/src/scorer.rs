//! Cosine similarity scoring: stage one of the retrieval pipeline.

use navio_core::models::{EmbeddedItem, RetrievalCandidate};

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 for mismatched lengths and for zero-magnitude vectors. The
/// mismatched-length case is deliberate policy, not an error: a dimension
/// mismatch between query and candidate degrades that candidate's ranking
/// (distance 1.0) instead of failing the whole retrieval.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Cosine distance: `1 - cosine_similarity`, in [0, 2].
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    1.0 - cosine_similarity(a, b)
}

/// Score every item against the query vector and sort ascending by
/// distance. The sort is stable, so equal-distance items keep store order —
/// retrieval stays deterministic for deterministic inputs.
pub fn score_candidates(
    query_vector: &[f32],
    items: Vec<EmbeddedItem>,
) -> Vec<RetrievalCandidate> {
    let mut candidates: Vec<RetrievalCandidate> = items
        .into_iter()
        .map(|item| {
            let distance = cosine_distance(query_vector, &item.vector);
            RetrievalCandidate { item, distance }
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use navio_core::models::ItemKind;

    fn item(id: &str, vector: Vec<f32>) -> EmbeddedItem {
        EmbeddedItem {
            id: id.to_string(),
            program_id: "p".to_string(),
            kind: ItemKind::Course,
            text: String::new(),
            vector,
            metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn distance_of_identical_vectors_is_zero() {
        let v = vec![1.0, 0.0, 0.0];
        assert!(cosine_distance(&v, &v).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_return_exactly_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_distance(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 1.0);
    }

    #[test]
    fn zero_magnitude_returns_zero_not_nan() {
        let zero = vec![0.0, 0.0];
        let v = vec![1.0, 0.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
    }

    #[test]
    fn opposite_vectors_have_similarity_minus_one() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_candidates_sorts_ascending_by_distance() {
        let query = vec![1.0, 0.0];
        let items = vec![
            item("far", vec![0.0, 1.0]),
            item("near", vec![1.0, 0.0]),
            item("mid", vec![1.0, 1.0]),
        ];
        let scored = score_candidates(&query, items);
        let ids: Vec<&str> = scored.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert!(scored.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn score_candidates_keeps_store_order_on_ties() {
        let query = vec![1.0, 0.0];
        let items = vec![
            item("first", vec![1.0, 0.0]),
            item("second", vec![2.0, 0.0]),
            item("third", vec![3.0, 0.0]),
        ];
        let scored = score_candidates(&query, items);
        let ids: Vec<&str> = scored.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn mismatched_stored_vector_ranks_behind_aligned_ones() {
        let query = vec![1.0, 0.0];
        let items = vec![
            item("wrong-dims", vec![1.0, 0.0, 0.0]),
            item("aligned", vec![0.9, 0.1]),
        ];
        let scored = score_candidates(&query, items);
        assert_eq!(scored[0].item.id, "aligned");
        assert_eq!(scored[1].distance, 1.0);
    }
}
