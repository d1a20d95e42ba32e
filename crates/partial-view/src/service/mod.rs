//! # Partial View Service
//!
//! High-level service implementing the `PartialViewApi` port.
//!
//! The service wraps the domain `PartialView` together with its random source
//! and configuration, and is the only layer that emits log events.

mod api;
mod core;

pub use self::core::PartialViewService;
