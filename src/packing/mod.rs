//! One-dimensional bin packing on top of the [`ga`](crate::ga) engine.
//!
//! # Encoding
//!
//! Each item gets a bin index in `[0, N)`, where `N` is the item count.
//! One bin per item is always representable, so a feasible packing is
//! always reachable even when the instance is tight.
//!
//! # Fitness
//!
//! `-(bins_used + overflow * 1000)`; see [`fitness`].
//!
//! # Reference
//! - Falkenauer (1996), "A Hybrid Grouping Genetic Algorithm for Bin Packing"
//! - Martello & Toth (1990), *Knapsack Problems*, ch. 8 (lower bound L1)

mod chromosome;
pub mod fitness;
mod grouping;
mod instance;
mod problem;
mod solver;

pub use chromosome::{is_valid, random_chromosome, Chromosome};
pub use fitness::{FitnessBreakdown, OVERFLOW_PENALTY};
pub use grouping::BinGrouping;
pub use instance::ProblemInstance;
pub use problem::BinPackingProblem;
pub use solver::{pack, pack_with_observer, pack_with_rng, PackingSolution};
