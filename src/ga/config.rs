//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// All hyperparameters are fixed for the whole run. There is no early
/// stopping: the loop always executes `max_generations` generations.
///
/// # Defaults
///
/// ```
/// use u_binpack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_binpack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Number of distinct individuals drawn per tournament.
    ///
    /// Must not exceed `population_size`, since a tournament samples
    /// without replacement.
    pub tournament_size: usize,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to score the population in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature. Scores are pure, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Emit a progress event every `log_interval` generations.
    ///
    /// Set to 0 to disable progress events.
    pub log_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            tournament_size: 3,
            mutation_rate: 0.05,
            parallel: false,
            seed: None,
            log_interval: 50,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the per-gene mutation rate.
    ///
    /// Not clamped: an out-of-range rate is reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress event interval (0 to disable).
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.tournament_size, 3);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert_eq!(config.log_interval, 50);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_tournament_size(5)
            .with_mutation_rate(0.1)
            .with_parallel(true)
            .with_seed(42)
            .with_log_interval(0);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.tournament_size, 5);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_interval, 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default()
            .with_population_size(0)
            .with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::NoGenerations));
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
        assert_eq!(
            GaConfig::default().with_mutation_rate(1.5).validate(),
            Err(ConfigError::MutationRateOutOfRange(1.5))
        );
        assert!(GaConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_tournament_too_large() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TournamentTooLarge {
                tournament_size: 5,
                population_size: 4,
            })
        );
    }

    #[test]
    fn test_validate_tournament_equal_to_population() {
        let config = GaConfig::default()
            .with_population_size(3)
            .with_tournament_size(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyTournament));
    }
}
