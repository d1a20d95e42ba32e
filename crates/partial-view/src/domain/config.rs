//! View configuration and validation
//!
//! # Example
//!
//! ```
//! use cyclon_partial_view::{TieBreak, ViewConfig};
//!
//! let config = ViewConfig::default()
//!     .with_tie_break(TieBreak::FirstEncountered)
//!     .with_rng_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Rule for `get_oldest` when several peers share the maximum oldest age.
///
/// Peers are encountered in ascending identifier order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first peer reaching the maximum wins (strictly-greater replaces).
    FirstEncountered,
    /// The last peer reaching the maximum wins (greater-or-equal replaces).
    #[default]
    LastEncountered,
}

impl TieBreak {
    /// Whether a candidate with `candidate` oldest age replaces the leader at `leader`.
    pub(crate) fn replaces<T: Ord>(self, candidate: &T, leader: &T) -> bool {
        match self {
            TieBreak::FirstEncountered => candidate > leader,
            TieBreak::LastEncountered => candidate >= leader,
        }
    }
}

/// Partial view configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Tie-break rule for `get_oldest`
    pub tie_break: TieBreak,
    /// Seed for the service's random source; entropy-seeded when absent
    pub rng_seed: Option<u64>,
    /// Log a warning once a peer's multiplicity exceeds this value
    pub multiplicity_warn_threshold: Option<usize>,
}

impl ViewConfig {
    /// Validate value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.multiplicity_warn_threshold == Some(0) {
            return Err(ConfigError::InvalidParameters(
                "multiplicity_warn_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style method to set the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder-style method to fix the random seed
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Builder-style method to set the multiplicity warning threshold
    pub fn with_multiplicity_warn_threshold(mut self, threshold: usize) -> Self {
        self.multiplicity_warn_threshold = Some(threshold);
        self
    }
}
