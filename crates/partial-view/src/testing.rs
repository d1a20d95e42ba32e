//! Centralized Testing Utilities
//!
//! Available with the `test-utils` feature flag.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::RandomSource;

pub use crate::adapters::FixedRandomSource;

/// A random source that replays a scripted list of indices, cycling.
///
/// Each draw is reduced modulo the candidate count.
///
/// # Example
///
/// ```rust
/// use cyclon_partial_view::testing::SequenceRandomSource;
/// use cyclon_partial_view::RandomSource;
///
/// let rng = SequenceRandomSource::new(vec![1, 0]);
/// assert_eq!(rng.random_index(2), 1);
/// assert_eq!(rng.random_index(2), 0);
/// assert_eq!(rng.random_index(2), 1);
/// ```
#[derive(Debug)]
pub struct SequenceRandomSource {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandomSource {
    /// Create a source replaying `script`. An empty script always yields 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandomSource {
    fn random_index(&self, len: usize) -> usize {
        let draw = self.cursor.fetch_add(1, Ordering::SeqCst);
        if len == 0 || self.script.is_empty() {
            return 0;
        }
        self.script[draw % self.script.len()] % len
    }
}
