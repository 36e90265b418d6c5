//! Packing entry points and the solution type handed to reporting code.

use rand::Rng;
use tracing::{info, instrument};

use super::chromosome::Chromosome;
use super::fitness::assess;
use super::grouping::BinGrouping;
use super::instance::ProblemInstance;
use super::problem::BinPackingProblem;
use crate::error::Result;
use crate::ga::{GaConfig, GaResult, GaRunner};

/// A packing produced by the GA, with everything derivable from its
/// chromosome precomputed.
///
/// Carries data only; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackingSolution {
    /// Bin index of every item.
    pub chromosome: Chromosome,
    /// Items grouped by bin (non-empty bins only, ascending bin index).
    pub grouping: BinGrouping,
    /// Number of non-empty bins.
    pub bins_used: usize,
    /// Total capacity overflow.
    pub overflow: f64,
    /// Score of `chromosome`.
    pub fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best score per scored population (see [`GaResult::fitness_history`]).
    pub fitness_history: Vec<f64>,
}

impl PackingSolution {
    /// Builds a solution from a GA result.
    pub fn from_result(instance: &ProblemInstance, result: GaResult<Chromosome>) -> Self {
        let breakdown = assess(&result.best, instance);
        let grouping = BinGrouping::from_chromosome(&result.best, instance.item_sizes());
        Self {
            chromosome: result.best,
            grouping,
            bins_used: breakdown.bins_used,
            overflow: breakdown.overflow,
            fitness: breakdown.score,
            generations: result.generations,
            fitness_history: result.fitness_history,
        }
    }

    /// Whether no bin exceeds its capacity.
    pub fn is_feasible(&self) -> bool {
        self.overflow == 0.0
    }
}

/// Searches for a low-bin-count packing of `instance`.
///
/// # Errors
/// Returns a configuration error, before any generation runs, if `config`
/// is invalid.
///
/// # Example
/// ```
/// use u_binpack::ga::GaConfig;
/// use u_binpack::packing::{pack, ProblemInstance};
///
/// let instance = ProblemInstance::from_integers(&[5], 10).unwrap();
/// let config = GaConfig::default().with_max_generations(10).with_seed(1);
/// let solution = pack(&instance, &config).unwrap();
/// assert_eq!(solution.bins_used, 1);
/// assert_eq!(solution.fitness, -1.0);
/// ```
pub fn pack(instance: &ProblemInstance, config: &GaConfig) -> Result<PackingSolution> {
    pack_with_observer(instance, config, |_, _| {})
}

/// Like [`pack`], calling `observer(generation, best_fitness)` after each
/// generation is scored.
#[instrument(
    skip_all,
    fields(items = instance.item_count(), capacity = instance.capacity())
)]
pub fn pack_with_observer<F>(
    instance: &ProblemInstance,
    config: &GaConfig,
    observer: F,
) -> Result<PackingSolution>
where
    F: FnMut(usize, f64),
{
    let problem = BinPackingProblem::new(instance);
    let result = GaRunner::run_with_observer(&problem, config, observer)?;
    Ok(finish(instance, result))
}

/// Like [`pack`], drawing all randomness from `rng` instead of `config.seed`.
pub fn pack_with_rng<R: Rng>(
    instance: &ProblemInstance,
    config: &GaConfig,
    rng: &mut R,
) -> Result<PackingSolution> {
    let problem = BinPackingProblem::new(instance);
    let result = GaRunner::run_with_rng(&problem, config, rng, |_, _| {})?;
    Ok(finish(instance, result))
}

fn finish(instance: &ProblemInstance, result: GaResult<Chromosome>) -> PackingSolution {
    let solution = PackingSolution::from_result(instance, result);
    info!(
        bins_used = solution.bins_used,
        lower_bound = instance.lower_bound(),
        overflow = solution.overflow,
        "packing finished"
    );
    solution
}
