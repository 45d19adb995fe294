//! Deterministic per-entity RNG.
//!
//! # Determinism strategy
//!
//! Every entity run owns one `EntityRng`, seeded from the entity's own seed.
//! When a population shares one master seed, each entity's seed is derived
//! as:
//!
//!   seed = global_seed XOR (entity_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  This
//! means:
//!
//! - Entities never share RNG state, so results do not depend on which
//!   worker thread ran which entity or in what order.
//! - Appending entities to a population does not disturb existing seeds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-entity deterministic RNG handed to every hook call.
///
/// The type is deliberately not `Sync`: each run holds its own instance.
pub struct EntityRng(SmallRng);

impl EntityRng {
    pub fn new(seed: u64) -> Self {
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for entity `index` of a population sharing `global_seed`.
    #[inline]
    pub fn derive_seed(global_seed: u64, index: usize) -> u64 {
        global_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `a + (b - a) * u` for `u` uniform in `[0, 1)`.
    ///
    /// Unlike `gen_range` this accepts `a == b` (returns `a`) and `a > b`
    /// (samples `(b, a]`), so hook parameters never need pre-sorting.
    #[inline]
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        let u: f64 = self.0.r#gen();
        a + (b - a) * u
    }
}
