//! Value sequences shared by sort and policy tests.

/// Insertion order of the reference scenario.
pub const SCENARIO_INPUT: [f64; 5] = [5.0, 3.0, 8.0, 1.0, 4.0];

/// Buffer contents after inserting [`SCENARIO_INPUT`].
pub const SCENARIO_SORTED: [f64; 5] = [1.0, 3.0, 4.0, 5.0, 8.0];

/// Repeated equal values.
pub const DUPLICATES: [f64; 3] = [2.0, 2.0, 2.0];

/// `0, 1, ..., n - 1`.
pub fn ascending(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// `n - 1, ..., 1, 0`. Every insertion lands at index 0.
pub fn descending(n: usize) -> Vec<f64> {
    (0..n).rev().map(|i| i as f64).collect()
}

/// Deterministic pseudo-random integers in `[0, max]` from a linear
/// congruential generator. Cheap and dependency-free for fixtures.
pub fn scrambled(n: usize, max: u32, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % (u64::from(max) + 1)) as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_sorted_is_sorted_input() {
        let mut input = SCENARIO_INPUT.to_vec();
        input.sort_by(f64::total_cmp);
        assert_eq!(input, SCENARIO_SORTED);
    }

    #[test]
    fn scrambled_is_deterministic_and_bounded() {
        let a = scrambled(100, 10, 7);
        assert_eq!(a, scrambled(100, 10, 7));
        assert!(a.iter().all(|&v| (0.0..=10.0).contains(&v)));
    }

    #[test]
    fn descending_reverses_ascending() {
        let mut d = descending(5);
        d.reverse();
        assert_eq!(d, ascending(5));
    }
}
