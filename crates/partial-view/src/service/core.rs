use tracing::debug;

use crate::adapters::RngRandomSource;
use crate::domain::{ConfigError, PartialView, ViewConfig, ViewError};
use crate::ports::{ConfigProvider, RandomSource};

/// Partial view service implementing the driving port.
///
/// # Example
///
/// ```rust
/// use cyclon_partial_view::{PartialViewApi, PartialViewService, PeerId, ViewConfig};
///
/// let mut service = PartialViewService::from_config(ViewConfig::default().with_rng_seed(1))?;
/// service.add_neighbor(PeerId::from("a"));
/// service.increment();
/// assert_eq!(service.get_oldest()?, PeerId::from("a"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PartialViewService {
    /// The underlying membership table (domain layer)
    pub(crate) view: PartialView,
    /// Random source for least-frequent selection
    pub(crate) rng: Box<dyn RandomSource>,
    /// Active configuration
    pub(crate) config: ViewConfig,
}

impl PartialViewService {
    /// Create a service with an explicit random source.
    ///
    /// `config.rng_seed` is ignored here; the given source is used as is.
    pub fn new(config: ViewConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            view: PartialView::with_tie_break(config.tie_break),
            rng,
            config,
        }
    }

    /// Create a service whose random source follows `config.rng_seed`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameters` if the config fails validation.
    pub fn from_config(config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => {
                debug!(seed, "seeding partial view random source");
                RngRandomSource::seeded(seed)
            }
            None => RngRandomSource::from_entropy(),
        };

        Ok(Self::new(config, Box::new(rng)))
    }

    /// Create a service from a configuration provider.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self, ConfigError> {
        Self::from_config(provider.view_config())
    }

    /// Get the underlying membership table.
    pub fn view(&self) -> &PartialView {
        &self.view
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Log a routine peer-absence failure and hand it back.
    pub(crate) fn report(&self, err: ViewError) -> ViewError {
        match err.peer() {
            Some(peer) => debug!(operation = err.operation(), %peer, "peer not in view"),
            None => debug!(operation = err.operation(), "view is empty"),
        }
        err
    }
}

impl std::fmt::Debug for PartialViewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartialViewService")
            .field("view", &self.view)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
