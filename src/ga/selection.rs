//! Parent selection.
//!
//! Selection works on the score slice alone: it returns an index into the
//! population rather than a chromosome, so the runner can borrow parents
//! without cloning them.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

/// Tournament selection: draw `k` distinct individuals, return the best.
///
/// Individuals are drawn uniformly **without replacement** within one
/// tournament; separate calls are independent, so the same individual can
/// win two tournaments in a row. Higher score wins. On a tie, the
/// individual drawn first wins.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `scores` is empty, `k` is zero, or `k > scores.len()`.
pub fn tournament<R: Rng>(scores: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!scores.is_empty(), "cannot select from empty population");
    assert!(
        k >= 1 && k <= scores.len(),
        "tournament size {k} out of range for population of {}",
        scores.len()
    );

    let mut drawn = index::sample(rng, scores.len(), k).into_iter();
    let mut best_idx = drawn.next().expect("k >= 1");
    for idx in drawn {
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Index of the highest score; the first occurrence wins on ties.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn best_index(scores: &[f64]) -> usize {
    assert!(!scores.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_full_size_always_best() {
        let scores = [-10.0, -5.0, -1.0, -8.0];
        let mut rng = create_rng(42);

        // Without replacement, a full-size tournament sees everyone.
        for _ in 0..1000 {
            assert_eq!(tournament(&scores, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let scores = [-10.0, -5.0, -1.0, -8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&scores, 2, &mut rng)] += 1;
        }
        // P(best in a 2-of-4 draw) = 1/2
        assert!(
            counts[2] > 4500,
            "expected best selected ~50% of the time, got {counts:?}"
        );
        // The worst can never win a tournament of size 2.
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let scores = [-10.0, -5.0, -1.0, -8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&scores, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[-3.0], 1, &mut rng), 0);
    }

    #[test]
    fn test_tournament_equal_scores_uniform() {
        let scores = [-5.0; 4];
        let mut rng = create_rng(7);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&scores, 3, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], 3, &mut rng);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tournament_larger_than_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[-1.0, -2.0], 3, &mut rng);
    }

    #[test]
    fn test_best_index_first_max_wins() {
        assert_eq!(best_index(&[-3.0, -1.0, -2.0, -1.0]), 1);
        assert_eq!(best_index(&[-7.0]), 0);
        assert_eq!(best_index(&[-1.0, -1.0, -1.0]), 0);
    }
}
