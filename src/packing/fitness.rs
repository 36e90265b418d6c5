//! Fitness evaluation for bin-index chromosomes.
//!
//! The score is a negated cost:
//!
//! ```text
//! score = -(bins_used + overflow * OVERFLOW_PENALTY)
//! ```
//!
//! With integer item sizes a single unit of overflow costs as much as a
//! thousand extra bins, so any feasible packing outranks every infeasible
//! packing that saves fewer than a thousand bins. Feasibility is never
//! enforced structurally; the penalty only steers the search.

use super::grouping::BinGrouping;
use super::instance::ProblemInstance;

/// Cost of one unit of capacity overflow, in bins.
pub const OVERFLOW_PENALTY: f64 = 1000.0;

/// The components of a chromosome's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessBreakdown {
    /// Number of non-empty bins.
    pub bins_used: usize,
    /// Total capacity overflow summed over bins.
    pub overflow: f64,
    /// Combined score (higher is better).
    pub score: f64,
}

/// Combines bin count and overflow into a score.
pub fn score(bins_used: usize, overflow: f64) -> f64 {
    -(bins_used as f64 + overflow * OVERFLOW_PENALTY)
}

/// Scores a chromosome against an instance and returns the components.
///
/// # Panics
/// Panics if the chromosome length differs from the item count or any
/// gene lies outside `[0, max_bins)`: both indicate an operator defect.
pub fn assess(chromosome: &[usize], instance: &ProblemInstance) -> FitnessBreakdown {
    let max_bins = instance.max_bins();
    assert!(
        chromosome.iter().all(|&gene| gene < max_bins),
        "gene out of range [0, {max_bins}): {chromosome:?}"
    );

    let grouping = BinGrouping::from_chromosome(chromosome, instance.item_sizes());
    let bins_used = grouping.bins_used();
    let overflow = grouping.overflow(instance.capacity());

    FitnessBreakdown {
        bins_used,
        overflow,
        score: score(bins_used, overflow),
    }
}

/// Scores a chromosome against an instance. Higher is better.
pub fn evaluate(chromosome: &[usize], instance: &ProblemInstance) -> f64 {
    assess(chromosome, instance).score
}
