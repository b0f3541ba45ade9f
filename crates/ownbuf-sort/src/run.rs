//! End-to-end sort runs: allocate, fill from a seeded source, time.

use std::time::{Duration, Instant};

use log::{debug, warn};
use ownbuf_core::Buffer;

use crate::config::SortConfig;
use crate::error::SortError;
use crate::insertion::fill_sorted;
use crate::source::RandomSource;
use crate::verify::verify_sorted;

/// The outcome of [`run`]: the filled buffer and how long filling took.
#[derive(Debug)]
pub struct SortRun<B> {
    /// The buffer, filled and (if the algorithm is correct) sorted.
    pub buffer: B,
    /// Seed the values were drawn with.
    pub seed: u64,
    /// Time spent generating and inserting values. Excludes allocation
    /// and verification.
    pub elapsed: Duration,
}

impl<B: Buffer> SortRun<B> {
    /// Check the postcondition: the buffer is non-decreasing.
    pub fn verify(&self) -> Result<(), SortError> {
        verify_sorted(&self.buffer).inspect_err(|err| warn!("sort verification failed: {err}"))
    }
}

/// Allocate a `B` of `config.count` slots and insertion-sort random values
/// into it.
///
/// # Errors
///
/// [`SortError::Buffer`] if the buffer cannot be allocated.
pub fn run<B: Buffer>(config: &SortConfig) -> Result<SortRun<B>, SortError> {
    let seed = config.resolve_seed();
    debug!(
        "sorting {} values in [0, {}] with seed {seed}",
        config.count, config.max_value
    );

    let mut buffer = B::with_len(config.count)?;
    let start = Instant::now();
    fill_sorted(&mut buffer, RandomSource::new(seed, config.max_value))?;
    let elapsed = start.elapsed();

    debug!("inserted {} values in {elapsed:?}", config.count);
    Ok(SortRun {
        buffer,
        seed,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownbuf_policy::{DeepCopyBuffer, ManualBuffer, SharedBuffer, UniqueBuffer};

    #[test]
    fn run_produces_verified_buffer() {
        let config = SortConfig::new(500).with_seed(11);
        let result = run::<ManualBuffer>(&config).unwrap();
        assert_eq!(result.buffer.size(), 500);
        assert_eq!(result.seed, 11);
        result.verify().unwrap();
    }

    #[test]
    fn zero_count_is_trivially_sorted() {
        let result = run::<UniqueBuffer>(&SortConfig::new(0)).unwrap();
        assert_eq!(result.buffer.size(), 0);
        result.verify().unwrap();
    }

    #[test]
    fn policies_agree_for_same_seed() {
        let config = SortConfig::new(200).with_seed(5).with_max_value(50);
        let deep = run::<DeepCopyBuffer>(&config).unwrap().buffer.to_vec();
        let unique = run::<UniqueBuffer>(&config).unwrap().buffer.to_vec();
        let shared = run::<SharedBuffer>(&config).unwrap().buffer.to_vec();
        let manual = run::<ManualBuffer>(&config).unwrap().buffer.to_vec();
        assert_eq!(deep, unique);
        assert_eq!(deep, shared);
        assert_eq!(deep, manual);
        assert!(deep.iter().all(|&v| (0.0..=50.0).contains(&v)));
    }

    #[test]
    fn unseeded_run_records_drawn_seed() {
        let config = SortConfig::new(10);
        let first = run::<DeepCopyBuffer>(&config).unwrap();
        let replay = run::<DeepCopyBuffer>(&config.clone().with_seed(first.seed)).unwrap();
        assert_eq!(first.buffer, replay.buffer);
    }

    #[test]
    fn oversized_count_reports_buffer_error() {
        let err = run::<UniqueBuffer>(&SortConfig::new(usize::MAX)).unwrap_err();
        assert!(matches!(err, SortError::Buffer(_)));
    }
}
