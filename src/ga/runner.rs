//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::population::{advance, evaluate, initialize};
use super::selection::best_index;
use super::types::GaProblem;
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;
use tracing::{debug, info};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<C> {
    /// Best chromosome of the final population.
    pub best: C,

    /// Score of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Best score of every scored population, in order.
    ///
    /// Entry `g` is the best score of generation `g` (entry 0 is the
    /// initial population); the last entry is the final population.
    /// Length is `generations + 1`. Non-decreasing because of elitism.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns an error, before any generation runs, if the configuration
    /// is invalid.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Chromosome>> {
        Self::run_with_observer(problem, config, |_, _| {})
    }

    /// Runs the GA, calling `observer(generation, best_fitness)` after each
    /// generation has been scored.
    ///
    /// The observer only watches; it cannot influence the search.
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &GaConfig,
        observer: F,
    ) -> Result<GaResult<P::Chromosome>>
    where
        P: GaProblem,
        F: FnMut(usize, f64),
    {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        Self::run_with_rng(problem, config, &mut rng, observer)
    }

    /// Runs the GA with a caller-supplied random source.
    ///
    /// `config.seed` is ignored. Two runs with identically seeded
    /// generators and the same config produce identical results.
    pub fn run_with_rng<P, R, F>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult<P::Chromosome>>
    where
        P: GaProblem,
        R: Rng,
        F: FnMut(usize, f64),
    {
        config.validate()?;

        info!(
            population_size = config.population_size,
            generations = config.max_generations,
            tournament_size = config.tournament_size,
            mutation_rate = config.mutation_rate,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population = initialize(problem, config.population_size, rng);
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            let scores = evaluate(problem, &population, config.parallel);
            let gen_best = scores[best_index(&scores)];
            fitness_history.push(gen_best);

            problem.on_generation(gen, gen_best);
            observer(gen, gen_best);
            if config.log_interval > 0 && gen % config.log_interval == 0 {
                debug!(generation = gen, best_fitness = gen_best, "generation scored");
            }

            population = advance(problem, &population, &scores, config, rng);
        }

        // 3. Final pass
        let scores = evaluate(problem, &population, config.parallel);
        let best_idx = best_index(&scores);
        let best_fitness = scores[best_idx];
        fitness_history.push(best_fitness);

        info!(best_fitness, "GA run finished");

        Ok(GaResult {
            best: population.swap_remove(best_idx),
            best_fitness,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
