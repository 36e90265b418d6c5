//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on the [`GaProblem`] trait, which
//! specifies how to create, evaluate, crossover, and mutate chromosomes.
//!
//! # Search dynamics
//!
//! - Single-chromosome elitism: the best of each generation is copied
//!   unchanged into the next one, so the best score never decreases.
//! - Tournament selection without replacement inside a tournament.
//! - Exactly one child per pair of parents.
//! - Fixed generation budget, no convergence-based early stop.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with fitness history
//!
//! # Submodules
//!
//! - [`operators`]: Label-encoding crossover and mutation operators
//! - [`population`]: Initialization, scoring and elitist replacement
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Falkenauer (1996), "A Hybrid Grouping Genetic Algorithm for Bin Packing"

mod config;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::GaProblem;
