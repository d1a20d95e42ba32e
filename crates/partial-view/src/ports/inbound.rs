//! # Driving Ports (Inbound API)
//!
//! The operations the surrounding gossip/exchange protocol invokes. All of them
//! are synchronous and run to completion; callers serialize access when the
//! view is shared between concurrent exchange handlers.

use crate::domain::{Age, PeerId, ViewError, ViewStats};

/// Primary partial view API (Driving Port)
pub trait PartialViewApi {
    /// Peer whose longest-standing reference is the oldest in the view.
    ///
    /// # Errors
    ///
    /// `PeerNotFound` when the view is empty.
    fn get_oldest(&self) -> Result<PeerId, ViewError>;

    /// Age every reference by one round.
    fn increment(&mut self);

    /// Insert a fresh reference to `peer`. Returns the resulting multiplicity.
    fn add_neighbor(&mut self, peer: PeerId) -> usize;

    /// Remove the newest reference to `peer`. Returns its age.
    ///
    /// # Errors
    ///
    /// `PeerNotFound` when `peer` holds no reference.
    fn remove_neighbor(&mut self, peer: &PeerId) -> Result<Age, ViewError>;

    /// Remove every reference to `peer`. Returns how many there were.
    ///
    /// # Errors
    ///
    /// `PeerNotFound` when `peer` holds no reference.
    fn remove_all_neighbor(&mut self, peer: &PeerId) -> Result<usize, ViewError>;

    /// A uniformly chosen peer among those with the fewest references.
    ///
    /// # Errors
    ///
    /// `PeerNotFound` when the view is empty.
    fn get_least_frequent(&self) -> Result<PeerId, ViewError>;

    /// Number of distinct peers.
    fn len(&self) -> usize;

    /// Whether the view holds no peer.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `peer` holds at least one reference.
    fn contains(&self, peer: &PeerId) -> bool;

    /// Number of references to `peer`; 0 when absent.
    fn multiplicity(&self, peer: &PeerId) -> usize;

    /// Aggregate figures over the view.
    fn stats(&self) -> ViewStats;
}
