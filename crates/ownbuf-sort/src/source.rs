//! Value generation for sort runs.
//!
//! The client consumes any `Iterator<Item = f64>`. [`RandomSource`] is the
//! production source; tests feed fixed slices through `iter().copied()`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Endless stream of integers in `[0, max_value]` as `f64`.
///
/// Seeded ChaCha8, so a given `(seed, max_value)` always yields the same
/// sequence.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    max_value: u32,
    seed: u64,
}

impl RandomSource {
    /// A source seeded with `seed` drawing from `[0, max_value]`.
    pub fn new(seed: u64, max_value: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_value,
            seed,
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Iterator for RandomSource {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(f64::from(self.rng.random_range(0..=self.max_value)))
    }
}
