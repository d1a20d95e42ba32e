//! Domain Errors for the Partial View

use thiserror::Error;

use super::entities::PeerId;

/// Errors returned by membership table operations.
///
/// Peer absence is routine in gossip overlays (discovery and eviction race),
/// so callers decide whether to treat it as benign or fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The operation needed a peer (or any peer) that the view does not hold.
    #[error("{operation}: {}", describe_missing(.peer))]
    PeerNotFound {
        /// Name of the failing operation
        operation: &'static str,
        /// The missing peer, when the operation targeted one
        peer: Option<PeerId>,
    },
}

impl ViewError {
    /// Failure for an operation that targeted a specific peer.
    pub fn peer_not_found(operation: &'static str, peer: &PeerId) -> Self {
        Self::PeerNotFound {
            operation,
            peer: Some(peer.clone()),
        }
    }

    /// Failure for a whole-view query on an empty view.
    pub fn empty_view(operation: &'static str) -> Self {
        Self::PeerNotFound {
            operation,
            peer: None,
        }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::PeerNotFound { operation, .. } => operation,
        }
    }

    /// The missing peer, if one was named.
    pub fn peer(&self) -> Option<&PeerId> {
        match self {
            Self::PeerNotFound { peer, .. } => peer.as_ref(),
        }
    }
}

fn describe_missing(peer: &Option<PeerId>) -> String {
    match peer {
        Some(peer) => format!("peer {peer} not found in view"),
        None => "no peers in view".to_string(),
    }
}

/// Errors from loading or validating view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {error}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        error: String,
    },

    /// Config content is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Values parsed but are out of range
    #[error("invalid config: {0}")]
    InvalidParameters(String),
}
