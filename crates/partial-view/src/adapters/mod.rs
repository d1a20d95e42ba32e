//! # Adapters Layer
//!
//! Concrete implementations of the driven ports:
//!
//! | Port | Testing | Production |
//! |------|---------|------------|
//! | `RandomSource` | `FixedRandomSource` | `RngRandomSource` |
//! | `ConfigProvider` | `StaticConfigProvider` | `TomlConfigProvider` |

pub mod config;
pub mod random;

pub use config::{StaticConfigProvider, TomlConfigProvider};
pub use random::{FixedRandomSource, RngRandomSource};
