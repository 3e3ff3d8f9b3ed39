//! Property tests for the scoring and re-ranking pipeline.

use proptest::prelude::*;

use navio_core::models::{EmbeddedItem, ItemKind, RetrievalCandidate};
use navio_retrieval::{rerank, scorer};

const CODES: &[&str] = &["MATH 212", "BIOE 252", "CHEM 121", "PHYS 101", "COMP 182"];

fn item(id: usize, text: String, vector: Vec<f32>) -> EmbeddedItem {
    EmbeddedItem {
        id: format!("emb-{id}"),
        program_id: "prog".to_string(),
        kind: ItemKind::Course,
        text,
        vector,
        metadata: serde_json::Value::Null,
    }
}

fn vector_strategy(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, dims)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::sample::subsequence(CODES.to_vec(), 0..CODES.len())
        .prop_map(|codes| format!("Course notes mentioning {}", codes.join(" and ")))
}

fn candidates_strategy(max: usize) -> impl Strategy<Value = Vec<RetrievalCandidate>> {
    prop::collection::vec((text_strategy(), 0.0f64..2.0), 0..max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (text, distance))| RetrievalCandidate {
                item: item(i, text, vec![]),
                distance,
            })
            .collect()
    })
}

fn completed_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(CODES.to_vec(), 0..CODES.len())
        .prop_map(|codes| codes.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn prop_similarity_stays_in_range(
        a in vector_strategy(4),
        b in vector_strategy(4),
    ) {
        let sim = scorer::cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&sim));
        let dist = scorer::cosine_distance(&a, &b);
        prop_assert!((0.0..=2.0).contains(&dist));
    }

    #[test]
    fn prop_self_similarity_is_one_for_nonzero(v in vector_strategy(4)) {
        prop_assume!(v.iter().any(|x| x.abs() > 0.01));
        let sim = scorer::cosine_similarity(&v, &v);
        prop_assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn prop_mismatched_lengths_score_exactly_zero(
        a in vector_strategy(3),
        b in vector_strategy(5),
    ) {
        prop_assert_eq!(scorer::cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn prop_scoring_sorts_ascending(
        query in vector_strategy(4),
        vectors in prop::collection::vec(vector_strategy(4), 0..12),
    ) {
        let items: Vec<EmbeddedItem> = vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| item(i, String::new(), v))
            .collect();
        let scored = scorer::score_candidates(&query, items);
        prop_assert!(scored.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn prop_boost_never_increases_distance(
        candidates in candidates_strategy(12),
        completed in completed_strategy(),
    ) {
        let before: std::collections::HashMap<String, f64> = candidates
            .iter()
            .map(|c| (c.item.id.clone(), c.distance))
            .collect();

        let boosted = rerank::boost_completed(candidates, &completed, 0.1);
        for c in &boosted {
            prop_assert!(c.distance <= before[&c.item.id] + 1e-12);
            prop_assert!(c.distance >= 0.0);
        }
    }

    #[test]
    fn prop_boost_preserves_candidate_set(
        candidates in candidates_strategy(12),
        completed in completed_strategy(),
    ) {
        let mut before: Vec<String> = candidates.iter().map(|c| c.item.id.clone()).collect();
        let boosted = rerank::boost_completed(candidates, &completed, 0.1);
        let mut after: Vec<String> = boosted.iter().map(|c| c.item.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_boost_output_sorted_when_completed_nonempty(
        candidates in candidates_strategy(12),
        completed in completed_strategy(),
    ) {
        prop_assume!(!completed.is_empty());
        let boosted = rerank::boost_completed(candidates, &completed, 0.1);
        prop_assert!(boosted.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn prop_boost_is_deterministic(
        candidates in candidates_strategy(12),
        completed in completed_strategy(),
    ) {
        let a = rerank::boost_completed(candidates.clone(), &completed, 0.1);
        let b = rerank::boost_completed(candidates, &completed, 0.1);
        let ids_a: Vec<&String> = a.iter().map(|c| &c.item.id).collect();
        let ids_b: Vec<&String> = b.iter().map(|c| &c.item.id).collect();
        prop_assert_eq!(ids_a, ids_b);
    }
}
