//! Benchmark profiles for the ownbuf buffer policies.
//!
//! Provides pre-built [`SortConfig`] profiles and value sets:
//!
//! - [`reference_profile`]: 2 000 values, the everyday comparison size
//! - [`stress_profile`]: 20 000 values, where quadratic shifting dominates
//! - [`seeded_values`]: the exact values a seeded run would insert

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ownbuf_sort::{RandomSource, SortConfig};

/// Value count of [`reference_profile`].
pub const REFERENCE_COUNT: usize = 2_000;

/// Value count of [`stress_profile`].
pub const STRESS_COUNT: usize = 20_000;

/// Build the reference benchmark profile: 2 000 values in [0, 1000].
pub fn reference_profile(seed: u64) -> SortConfig {
    SortConfig::new(REFERENCE_COUNT).with_seed(seed)
}

/// Build the stress benchmark profile: 20 000 values in [0, 1000].
///
/// Same bound as [`reference_profile`] at 10x the count, so roughly 100x
/// the shifting work.
pub fn stress_profile(seed: u64) -> SortConfig {
    SortConfig::new(STRESS_COUNT).with_seed(seed)
}

/// The values a run of `config` inserts, in insertion order.
///
/// Lets a benchmark pre-generate input so the timed loop measures only
/// the buffer. An unseeded config draws its seed here.
pub fn seeded_values(config: &SortConfig) -> Vec<f64> {
    RandomSource::new(config.resolve_seed(), config.max_value)
        .take(config.count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_seeded() {
        assert_eq!(reference_profile(42).seed, Some(42));
        assert_eq!(stress_profile(42).count, 10 * reference_profile(42).count);
    }

    #[test]
    fn seeded_values_deterministic() {
        let config = reference_profile(7);
        let a = seeded_values(&config);
        let b = seeded_values(&config);
        assert_eq!(a.len(), REFERENCE_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_values_within_bound() {
        let config = SortConfig::new(500).with_seed(3).with_max_value(9);
        assert!(seeded_values(&config)
            .iter()
            .all(|&v| v.fract() == 0.0 && (0.0..=9.0).contains(&v)));
    }
}
