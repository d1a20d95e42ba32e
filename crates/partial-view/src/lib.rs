//! # Cyclon Partial View
//!
//! The partial-view membership table used by Cyclon-family peer-sampling
//! overlays. Each node keeps a locally maintained sample of the network: a
//! map from peer identifier to one age per independent reference to that
//! peer. Gossip rounds drive the table through six primitives:
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `get_oldest` | peer holding the longest-standing reference |
//! | `increment` | age every reference by one round |
//! | `add_neighbor` | insert a fresh reference (age 0) |
//! | `remove_neighbor` | drop the newest reference to a peer |
//! | `remove_all_neighbor` | drop every reference to a peer |
//! | `get_least_frequent` | uniform pick among least-referenced peers |
//!
//! The table performs no network activity and no timekeeping; aging happens
//! only on explicit `increment` calls.
//!
//! ## Architecture
//!
//! - **Domain Layer:** `PartialView`, `NeighborEntry`, value objects, errors
//! - **Ports Layer:** `PartialViewApi` (driving), `RandomSource` and
//!   `ConfigProvider` (driven)
//! - **Adapters Layer:** `RngRandomSource`, `FixedRandomSource`,
//!   `TomlConfigProvider`, `StaticConfigProvider`
//! - **Service Layer:** `PartialViewService` wires the domain to the ports
//!   and emits `tracing` events
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs to completion. The table is not
//! internally synchronized; callers serialize access when sharing it across
//! exchange handlers.
//!
//! ## Example
//!
//! ```rust
//! use cyclon_partial_view::{PartialViewApi, PartialViewService, PeerId, ViewConfig};
//!
//! let mut service = PartialViewService::from_config(ViewConfig::default())?;
//!
//! service.add_neighbor(PeerId::from("10.0.0.1:7000"));
//! service.increment();
//! service.add_neighbor(PeerId::from("10.0.0.2:7000"));
//!
//! // Exchange partner for this round
//! let partner = service.get_oldest()?;
//! assert_eq!(partner, PeerId::from("10.0.0.1:7000"));
//! service.remove_all_neighbor(&partner)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Scripted random sources for deterministic downstream tests.
/// Requires feature: `test-utils`
#[cfg(feature = "test-utils")]
pub mod testing;

// Domain
pub use domain::{
    invariant_entry_ordered, invariant_no_empty_entries, invariant_reference_count,
    invariant_view_ordered, Age, ConfigError, NeighborEntry, PartialView, PeerId, TieBreak,
    ViewConfig, ViewError, ViewStats,
};

// Ports
pub use ports::{ConfigProvider, PartialViewApi, RandomSource};

// Adapters
pub use adapters::{FixedRandomSource, RngRandomSource, StaticConfigProvider, TomlConfigProvider};

// Service
pub use service::PartialViewService;

#[cfg(feature = "test-utils")]
pub use testing::SequenceRandomSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
