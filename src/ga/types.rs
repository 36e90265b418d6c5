//! Core trait definitions for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and
//! a domain-specific problem such as bin packing.

use rand::Rng;

/// Defines a GA optimization problem.
///
/// The engine owns the population lifecycle; the problem supplies the
/// representation-specific pieces:
///
/// 1. **Initialization**: how to create a random chromosome
/// 2. **Evaluation**: how to score one
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a child at a per-gene rate
///
/// # Fitness convention
///
/// Scores are `f64` and **higher is better** (maximization). A problem
/// that naturally minimizes a cost returns the negated cost.
///
/// Scores are never stored on the chromosome: the engine recomputes them
/// every generation and keeps them in a slice parallel to the population.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may score the
/// population in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// The chromosome (solution encoding) type.
    type Chromosome: Clone + Send + Sync;

    /// Creates a random chromosome.
    fn create_chromosome<R: Rng>(&self, rng: &mut R) -> Self::Chromosome;

    /// Scores a chromosome. Higher is better.
    ///
    /// Must be a pure function of the chromosome; the runner relies on
    /// this both for parallel scoring and for elitism.
    fn evaluate(&self, chromosome: &Self::Chromosome) -> f64;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones `parent1` (no recombination).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Chromosome,
        _parent2: &Self::Chromosome,
        _rng: &mut R,
    ) -> Self::Chromosome {
        parent1.clone()
    }

    /// Mutates a freshly produced child in place.
    ///
    /// `rate` is the per-gene mutation probability from the config.
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _chromosome: &mut Self::Chromosome, _rate: f64, _rng: &mut R) {}

    /// Called after each generation has been scored, with the best score
    /// of that generation.
    ///
    /// Has no effect on the search. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
