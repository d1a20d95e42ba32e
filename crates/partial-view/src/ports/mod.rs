//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the API the gossip protocol calls each round
//! - **Driven Ports (Outbound):** randomness and configuration supplied by the host

pub mod inbound;
pub mod outbound;

pub use inbound::PartialViewApi;
pub use outbound::{ConfigProvider, RandomSource};
