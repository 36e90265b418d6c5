//! Error types.
//!
//! The failure surface is small: a run is rejected up front when the
//! problem instance or the GA configuration is invalid. Once a run has
//! started it cannot fail.

/// Invalid problem instance or GA configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item list must not be empty")]
    NoItems,
    #[error("item {index} has non-positive or non-finite size {size}")]
    InvalidItemSize { index: usize, size: f64 },
    #[error("bin capacity must be positive and finite, got {0}")]
    InvalidCapacity(f64),
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
    #[error("tournament_size must be at least 1")]
    EmptyTournament,
    #[error("tournament_size {tournament_size} exceeds population_size {population_size}")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
