//! Genetic operators for label-encoded chromosomes.
//!
//! A label chromosome assigns each position one value from a finite range
//! `[0, n_labels)`: bin indices, machine indices, colors. Unlike the
//! permutation operators used for sequencing problems, these operators
//! treat every position independently.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-position coin flip between the parents — O(n)
//!
//! # Mutation Operators
//!
//! - [`random_reset_mutation`]: per-position reset to a uniform label — O(n)
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.2

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover.
///
/// Each position independently takes the gene of `parent1` with
/// probability 0.5, otherwise the gene of `parent2`. The child therefore
/// never contains a value that is absent from both parents at that
/// position.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<T: Copy, R: Rng>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Random-reset mutation.
///
/// Each gene independently, with probability `rate`, is replaced by a
/// label drawn uniformly from `[0, n_labels)`. The draw may return the
/// gene's current value.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]` or `n_labels` is zero.
pub fn random_reset_mutation<R: Rng>(genes: &mut [usize], rate: f64, n_labels: usize, rng: &mut R) {
    assert!(n_labels > 0, "label range must not be empty");
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = rng.random_range(0..n_labels);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
