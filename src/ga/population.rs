//! Population lifecycle: initialization, scoring, and generational
//! replacement with single-chromosome elitism.

use super::config::GaConfig;
use super::selection::{best_index, tournament};
use super::types::GaProblem;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Creates `size` independent random chromosomes.
pub fn initialize<P: GaProblem, R: Rng>(problem: &P, size: usize, rng: &mut R) -> Vec<P::Chromosome> {
    (0..size).map(|_| problem.create_chromosome(rng)).collect()
}

/// Scores every chromosome, returning a slice-parallel score vector.
///
/// Scoring is pure, so the parallel path yields the same vector as the
/// sequential one.
pub fn evaluate<P: GaProblem>(problem: &P, population: &[P::Chromosome], parallel: bool) -> Vec<f64> {
    if parallel {
        evaluate_parallel(problem, population)
    } else {
        population.iter().map(|c| problem.evaluate(c)).collect()
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<P: GaProblem>(problem: &P, population: &[P::Chromosome]) -> Vec<f64> {
    population.par_iter().map(|c| problem.evaluate(c)).collect()
}

/// Without the `parallel` feature the flag is accepted and ignored.
#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<P: GaProblem>(problem: &P, population: &[P::Chromosome]) -> Vec<f64> {
    population.iter().map(|c| problem.evaluate(c)).collect()
}

/// Builds the next generation.
///
/// Slot 0 receives an unchanged copy of the best chromosome (first
/// occurrence on ties). Every other slot is a fresh child: two independent
/// tournaments pick the parents, then crossover and mutation produce the
/// child. The returned population has exactly `config.population_size`
/// chromosomes.
///
/// # Panics
/// Panics if `population` and `scores` differ in length or are empty.
pub fn advance<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Chromosome],
    scores: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Chromosome> {
    assert_eq!(
        population.len(),
        scores.len(),
        "population and scores must be parallel"
    );

    let mut next_gen = Vec::with_capacity(config.population_size);
    next_gen.push(population[best_index(scores)].clone());

    while next_gen.len() < config.population_size {
        let p1 = tournament(scores, config.tournament_size, rng);
        let p2 = tournament(scores, config.tournament_size, rng);

        let mut child = problem.crossover(&population[p1], &population[p2], rng);
        problem.mutate(&mut child, config.mutation_rate, rng);

        next_gen.push(child);
    }

    next_gen
}
