//! # Driven Ports (Outbound SPI)
//!
//! Interfaces the host application supplies to the partial view.

use crate::domain::ViewConfig;

/// Source of uniform random indices for `get_least_frequent`.
///
/// Injected so that tests can pin selection while production draws from a
/// real generator.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct AlwaysLast;
///
/// impl RandomSource for AlwaysLast {
///     fn random_index(&self, len: usize) -> usize {
///         len.saturating_sub(1)
///     }
/// }
/// ```
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn random_index(&self, len: usize) -> usize;
}

/// Abstract interface for configuration loading.
pub trait ConfigProvider: Send + Sync {
    /// Get partial view configuration.
    fn view_config(&self) -> ViewConfig;
}
