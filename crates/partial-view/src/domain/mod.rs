//! Domain Layer - Pure membership logic with no I/O
//!
//! This module contains the partial-view core:
//! - Peer identifiers and reference ages
//! - Neighbor entries (per-peer ordered age sequences)
//! - The membership table and its gossip-round primitives
//! - Configuration and error types
//! - Invariant checks over entries and whole views

pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod partial_view;

pub use config::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use partial_view::*;
