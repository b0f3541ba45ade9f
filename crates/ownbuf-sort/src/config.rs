//! Sort run configuration.

/// Configuration for one insertion-sort run.
///
/// Plain data: construct with [`SortConfig::new`] and adjust fields or use
/// the `with_*` helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Number of values to generate, and the buffer size.
    pub count: usize,

    /// Inclusive upper bound of generated values. Values are integers in
    /// `[0, max_value]`, stored as `f64`.
    ///
    /// Default: 1000.
    pub max_value: u32,

    /// RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl SortConfig {
    /// Default inclusive upper bound for generated values.
    pub const DEFAULT_MAX_VALUE: u32 = 1000;

    /// Configuration for `count` values with default bound and no seed.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_value: Self::DEFAULT_MAX_VALUE,
            seed: None,
        }
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the inclusive upper bound for generated values.
    pub fn with_max_value(mut self, max_value: u32) -> Self {
        self.max_value = max_value;
        self
    }

    /// The configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
