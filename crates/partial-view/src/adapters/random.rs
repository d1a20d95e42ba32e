//! Random Source Adapters

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Fixed random source for deterministic testing.
///
/// Always picks the same position (modulo the candidate count).
///
/// # Example
///
/// ```rust
/// use cyclon_partial_view::adapters::FixedRandomSource;
/// use cyclon_partial_view::RandomSource;
///
/// let rng = FixedRandomSource::new(42);
/// assert_eq!(rng.random_index(100), 42);
/// assert_eq!(rng.random_index(10), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FixedRandomSource {
    value: usize,
}

impl FixedRandomSource {
    /// Create a fixed random source that always returns the given value.
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// Create a random source that returns 0 (first candidate).
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl RandomSource for FixedRandomSource {
    fn random_index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.value % len
        }
    }
}

/// Production random source backed by `StdRng`.
///
/// The generator sits behind a mutex so the source can be shared by
/// reference while drawing.
#[derive(Debug)]
pub struct RngRandomSource {
    rng: Mutex<StdRng>,
}

impl RngRandomSource {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed deterministically, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RngRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for RngRandomSource {
    fn random_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.lock().gen_range(0..len)
    }
}
