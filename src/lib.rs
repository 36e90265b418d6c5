//! Genetic-algorithm bin packing.
//!
//! Searches for an assignment of items to capacity-bounded bins that uses
//! few bins, with a genetic algorithm rather than an exact or greedy
//! packer:
//!
//! - **GA engine** ([`ga`]): generic evolutionary loop with tournament
//!   selection, single-chromosome elitism and a fixed generation budget.
//! - **Bin packing** ([`packing`]): bin-index encoding, overflow-penalized
//!   fitness, bin grouping and the [`packing::pack`] entry point.
//!
//! The capacity constraint is soft. Overflow is penalized a thousand
//! times more heavily than an extra bin, so the search strongly prefers
//! feasible packings but may return an infeasible one when no feasible
//! packing exists (e.g. an item larger than the capacity).
//!
//! # Example
//!
//! ```
//! use u_binpack::ga::GaConfig;
//! use u_binpack::packing::{pack, ProblemInstance};
//!
//! let instance = ProblemInstance::from_integers(&[4, 8, 1, 4, 2, 1, 7], 10).unwrap();
//! let config = GaConfig::default().with_max_generations(100).with_seed(42);
//! let solution = pack(&instance, &config).unwrap();
//!
//! assert_eq!(solution.chromosome.len(), instance.item_count());
//! for (bin, items) in solution.grouping.iter() {
//!     println!("Bin {bin}: {items:?}");
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: score populations with rayon
//! - `serde`: serialize configs, instances and solutions

pub mod error;
pub mod ga;
pub mod packing;
pub mod random;

pub use error::{ConfigError, Error, Result};
