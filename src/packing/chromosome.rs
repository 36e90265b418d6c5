//! Bin-index encoding.
//!
//! A chromosome is a `Vec<usize>` of length `N`: gene `i` is the bin index
//! of item `i`, drawn from `[0, max_bins)`. Operators never change the
//! length, and every gene stays in range.

use rand::Rng;

/// Bin-index chromosome: `chromosome[i]` is the bin of item `i`.
pub type Chromosome = Vec<usize>;

/// Creates a chromosome with every gene drawn uniformly from `[0, max_bins)`.
///
/// # Panics
/// Panics if `max_bins` is zero.
pub fn random_chromosome<R: Rng>(item_count: usize, max_bins: usize, rng: &mut R) -> Chromosome {
    assert!(max_bins > 0, "max_bins must be positive");
    (0..item_count).map(|_| rng.random_range(0..max_bins)).collect()
}

/// Whether `chromosome` has length `item_count` and all genes below `max_bins`.
pub fn is_valid(chromosome: &[usize], item_count: usize, max_bins: usize) -> bool {
    chromosome.len() == item_count && chromosome.iter().all(|&gene| gene < max_bins)
}
