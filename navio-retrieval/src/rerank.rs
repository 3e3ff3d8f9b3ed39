//! Lexical re-rank boost: stage two of the retrieval pipeline.
//!
//! A candidate whose text mentions a course the student already completed is
//! likely a follow-on requirement, so each such mention reduces its distance.
//! Substring match, not token match: "MATH 212" also boosts text containing
//! "math 2120", a deliberate bias toward cheap, high-precision matching.

use navio_core::models::RetrievalCandidate;

/// Reduce each candidate's distance by `boost_per_match` for every completed
/// course whose lowercase form appears in the candidate's lowercase text,
/// clamp at zero, and re-sort ascending (stable).
///
/// Empty `completed_courses` is a no-op: candidates return unchanged. A
/// boost only ever improves (or holds) a candidate's position.
pub fn boost_completed(
    candidates: Vec<RetrievalCandidate>,
    completed_courses: &[String],
    boost_per_match: f64,
) -> Vec<RetrievalCandidate> {
    if completed_courses.is_empty() {
        return candidates;
    }

    let needles: Vec<String> = completed_courses.iter().map(|c| c.to_lowercase()).collect();

    let mut boosted = candidates;
    for candidate in &mut boosted {
        let text = candidate.item.text.to_lowercase();
        let matches = needles.iter().filter(|n| text.contains(n.as_str())).count();
        if matches > 0 {
            candidate.distance =
                (candidate.distance - boost_per_match * matches as f64).max(0.0);
        }
    }

    boosted.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    boosted
}
