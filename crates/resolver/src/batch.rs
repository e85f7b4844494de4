//! Bounded-concurrency bulk resolution preserving input row order.
//!
//! The bulk caller iterates a tabular dataset and needs output rows
//! aligned with input rows. Each resolution is independent, so rows fan
//! out onto a buffered stream; completion order never leaks into the
//! result vector.

use futures::StreamExt;
use futures::stream;

use titlefind_core::{Candidate, TitleRow};

use crate::Resolver;

/// Resolve every row with at most `concurrency` in-flight searches.
///
/// The output is index-aligned with `rows`. Rows that fail to match
/// resolve to an empty list, exactly like the single-call path.
pub async fn resolve_rows(
    resolver: &Resolver,
    rows: &[TitleRow],
    concurrency: usize,
) -> Vec<Vec<Candidate>> {
    stream::iter(rows)
        .map(|row| resolver.resolve(&row.title, row.year.as_deref()))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// The match a caller takes without human review: the highest-ranked
/// candidate.
pub fn top_pick(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.first()
}

/// More than one plausible match means the list should go to a human for
/// disambiguation.
pub fn needs_review(candidates: &[Candidate]) -> bool {
    candidates.len() > 1
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_pick_is_first_or_none() {
        assert!(top_pick(&[]).is_none());
        let candidates = vec![
            Candidate::new("Inception 2010", "tt1375666"),
            Candidate::new("Inception: The Cobol Job", "tt5295894"),
        ];
        assert_eq!(top_pick(&candidates).map(|c| c.id.as_str()), Some("tt1375666"));
    }

    #[test]
    fn review_needed_only_when_ambiguous() {
        assert!(!needs_review(&[]));
        assert!(!needs_review(&[Candidate::new("Inception 2010", "tt1375666")]));
        assert!(needs_review(&[
            Candidate::new("Inception 2010", "tt1375666"),
            Candidate::new("Inception: The Cobol Job", "tt5295894"),
        ]));
    }
}
