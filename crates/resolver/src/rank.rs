//! Fuzzy reordering of extracted candidates.
//!
//! The score is the classic sequence-matcher ratio: `2*M / T`, where `M`
//! is the total length of matched blocks found by recursively taking the
//! longest common block of the two strings, and `T` the sum of both
//! lengths. Ranking substitutes no other metric; callers depend on these
//! exact semantics for tie-break behavior.

use std::collections::HashMap;

use titlefind_core::Candidate;

/// Reorder candidates by descending similarity to `title`.
///
/// Lists of zero or one candidates come back untouched. The sort is
/// stable, so page-appearance order breaks ties. Nothing is dropped or
/// added.
pub fn rank(title: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
    if candidates.len() <= 1 {
        return candidates;
    }

    let mut scored: Vec<(f64, Candidate)> = candidates
        .into_iter()
        .map(|c| (similarity(title, &c.display), c))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, c)| c).collect()
}

/// Case-insensitive sequence-matcher ratio in `[0, 1]`.
///
/// Two empty strings are identical, ratio 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Total length of matched blocks: take the longest common block, then
/// recurse into the unmatched stretches on either side of it.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b_index.entry(ch).or_default().push(j);
    }

    let mut total = 0;
    let mut windows = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = windows.pop() {
        let (i, j, size) = longest_block(a, &b_index, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            windows.push((alo, i, blo, j));
            windows.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest block `a[i..i+size] == b[j..j+size]` within the window,
/// preferring the earliest start in `a` and then in `b` on equal length.
fn longest_block(
    a: &[char],
    b_index: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0usize);
    // run_ending[j] = length of the common run ending at a[i], b[j]
    let mut run_ending: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_index.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j == 0 {
                    1
                } else {
                    run_ending.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_runs.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        run_ending = next_runs;
    }
    best
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ratio_matches_pinned_values() {
        // Longest block "bcd" (3 chars); nothing else matches: 2*3/8.
        assert!(close(similarity("abcd", "bcde"), 0.75));
        // "inception" (9) against "inception 2" (11): 2*9/20.
        assert!(close(similarity("Inception", "Inception 2"), 0.9));
        // "inception" (9) against "inception (2010)" (16): 2*9/25.
        assert!(close(similarity("Inception", "Inception (2010)"), 0.72));
    }

    #[test]
    fn ratio_recurses_into_side_stretches() {
        // "qabxcd" vs "abycdf": longest block "ab", then the recursion on
        // the right stretch finds "cd". M = 4, T = 12.
        assert!(close(similarity("qabxcd", "abycdf"), 2.0 * 4.0 / 12.0));
    }

    #[test]
    fn ratio_is_case_insensitive() {
        assert!(close(similarity("ABC", "abc"), 1.0));
        assert!(close(similarity("The MATRIX", "the matrix"), 1.0));
    }

    #[test]
    fn ratio_bounds() {
        assert!(close(similarity("", ""), 1.0));
        assert!(close(similarity("abc", ""), 0.0));
        assert!(close(similarity("", "abc"), 0.0));
        assert!(close(similarity("abc", "xyz"), 0.0));
        let r = similarity("some title", "another thing");
        assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn multibyte_titles_do_not_panic() {
        let r = similarity("Amélie", "Le Fabuleux Destin d'Amélie Poulain");
        assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn closest_candidate_sorts_first() {
        let ranked = rank(
            "Inception",
            vec![
                Candidate::new("Inception (2010)", "tt1375666"),
                Candidate::new("Inception 2", "tt0000001"),
            ],
        );
        // 0.9 beats 0.72 under the pinned metric.
        assert_eq!(ranked[0].id, "tt0000001");
        assert_eq!(ranked[1].id, "tt1375666");
        assert!(
            similarity("Inception", &ranked[0].display)
                >= similarity("Inception", &ranked[1].display)
        );
    }

    #[test]
    fn ranking_is_descending_throughout() {
        let ranked = rank(
            "The Matrix",
            vec![
                Candidate::new("The Matrix Resurrections", "tt10838180"),
                Candidate::new("The Matrix", "tt0133093"),
                Candidate::new("Armitage III: Poly-Matrix", "tt0109151"),
                Candidate::new("The Matrix Reloaded", "tt0234215"),
            ],
        );
        let scores: Vec<f64> = ranked
            .iter()
            .map(|c| similarity("The Matrix", &c.display))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ranked[0].id, "tt0133093");
    }

    #[test]
    fn equal_scores_keep_page_order() {
        let ranked = rank(
            "Dune",
            vec![
                Candidate::new("Dune", "tt1160419"),
                Candidate::new("Dune", "tt0087182"),
            ],
        );
        assert_eq!(ranked[0].id, "tt1160419");
        assert_eq!(ranked[1].id, "tt0087182");
    }

    #[test]
    fn single_candidate_returned_untouched() {
        let one = vec![Candidate::new("Completely Unrelated", "tt0000002")];
        assert_eq!(rank("Inception", one.clone()), one);
    }

    #[test]
    fn empty_list_returned_untouched() {
        assert!(rank("Inception", Vec::new()).is_empty());
    }

    #[test]
    fn nothing_dropped_or_added() {
        let candidates: Vec<Candidate> = (0..5)
            .map(|i| Candidate::new(format!("Title {i}"), format!("tt000000{i}")))
            .collect();
        let ranked = rank("Title 3", candidates.clone());
        assert_eq!(ranked.len(), candidates.len());
        for c in &candidates {
            assert!(ranked.contains(c));
        }
    }
}
