//! Random number generation helpers.
//!
//! Every stochastic operation in this crate takes its generator as an
//! explicit `&mut R` argument. This module only builds the seeded
//! generator the runner hands around.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Two generators created from the same seed produce identical streams,
/// which is what makes seeded GA runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
