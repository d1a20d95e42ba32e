//! Configuration Provider Adapters

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{ConfigError, ViewConfig};
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - In-code config for testing/development
// ============================================================================

/// Static configuration provider.
///
/// Useful for tests and embedding. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: ViewConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the specified view config.
    #[must_use]
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn view_config(&self) -> ViewConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading
// ============================================================================

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    view: ViewConfig,
}

/// TOML-based configuration provider.
///
/// # Config File Format
///
/// ```toml
/// [view]
/// tie_break = "first_encountered"   # or "last_encountered"
/// rng_seed = 7
/// multiplicity_warn_threshold = 4
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone)]
pub struct TomlConfigProvider {
    config: ViewConfig,
}

impl TomlConfigProvider {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.view.validate()?;

        Ok(Self { config: file.view })
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn view_config(&self) -> ViewConfig {
        self.config.clone()
    }
}
