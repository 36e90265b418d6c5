//! Bin packing GA problem definition.
//!
//! Implements [`GaProblem`] for bin-index chromosomes, bridging the
//! problem instance to the generic GA engine.

use rand::Rng;

use super::chromosome::{random_chromosome, Chromosome};
use super::fitness;
use super::instance::ProblemInstance;
use crate::ga::operators::{random_reset_mutation, uniform_crossover};
use crate::ga::GaProblem;

/// GA problem definition for one-dimensional bin packing.
///
/// - Encoding: one bin index per item, `max_bins = item_count`
/// - Crossover: uniform
/// - Mutation: per-gene random reset
/// - Fitness: `-(bins_used + overflow * 1000)`
///
/// # Example
/// ```
/// use u_binpack::ga::{GaConfig, GaRunner};
/// use u_binpack::packing::{BinPackingProblem, ProblemInstance};
///
/// let instance = ProblemInstance::from_integers(&[5, 5, 4, 6], 10).unwrap();
/// let problem = BinPackingProblem::new(&instance);
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinPackingProblem<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> BinPackingProblem<'a> {
    /// Creates a problem over `instance`.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// The underlying instance.
    pub fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }
}

impl GaProblem for BinPackingProblem<'_> {
    type Chromosome = Chromosome;

    fn create_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        random_chromosome(self.instance.item_count(), self.instance.max_bins(), rng)
    }

    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        fitness::evaluate(chromosome, self.instance)
    }

    fn crossover<R: Rng>(&self, parent1: &Chromosome, parent2: &Chromosome, rng: &mut R) -> Chromosome {
        uniform_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
        random_reset_mutation(chromosome, rate, self.instance.max_bins(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::chromosome::is_valid;
    use crate::random::create_rng;

    #[test]
    fn test_operators_preserve_shape() {
        let instance =
            ProblemInstance::from_integers(&[4, 8, 1, 4, 2, 1, 7, 3, 6, 5, 2, 9, 3, 2], 10).unwrap();
        let problem = BinPackingProblem::new(&instance);
        let mut rng = create_rng(42);

        for _ in 0..200 {
            let p1 = problem.create_chromosome(&mut rng);
            let p2 = problem.create_chromosome(&mut rng);
            assert!(is_valid(&p1, 14, 14));

            let mut child = problem.crossover(&p1, &p2, &mut rng);
            assert!(is_valid(&child, 14, 14));

            problem.mutate(&mut child, 0.5, &mut rng);
            assert!(is_valid(&child, 14, 14), "mutated child invalid: {child:?}");
        }
    }

    #[test]
    fn test_evaluate_delegates_to_fitness() {
        let instance = ProblemInstance::from_integers(&[6, 5], 10).unwrap();
        let problem = BinPackingProblem::new(&instance);
        assert_eq!(problem.evaluate(&vec![0, 1]), -2.0);
        assert_eq!(problem.evaluate(&vec![1, 1]), -1001.0);
    }
}
