//! # Partial View (Membership Table)
//!
//! A node's bounded, locally maintained sample of the overlay. Each peer maps
//! to a [`NeighborEntry`] holding one age per independent reference; the same
//! peer may be referenced several times and that multiplicity is itself
//! protocol information.
//!
//! ## Invariants
//!
//! - A peer is present iff it holds at least one reference.
//! - Within an entry, ages are non-decreasing from newest to oldest reference.
//!
//! ## Encounter Order
//!
//! Whole-view scans visit peers in ascending [`PeerId`] order, which makes
//! `get_oldest` tie-breaking deterministic.
//!
//! ## Example
//!
//! ```
//! use cyclon_partial_view::{FixedRandomSource, PartialView, PeerId};
//!
//! let mut view = PartialView::new();
//! view.add_neighbor(PeerId::from("a"));
//! view.increment();
//! view.add_neighbor(PeerId::from("b"));
//!
//! assert_eq!(view.get_oldest().unwrap(), PeerId::from("a"));
//! assert_eq!(
//!     view.get_least_frequent(&FixedRandomSource::first()).unwrap(),
//!     PeerId::from("a"),
//! );
//! ```

use std::collections::BTreeMap;

use super::config::TieBreak;
use super::entities::{Age, NeighborEntry, PeerId, ViewStats};
use super::errors::ViewError;
use crate::ports::RandomSource;

/// The membership table.
#[derive(Debug, Clone, Default)]
pub struct PartialView {
    entries: BTreeMap<PeerId, NeighborEntry>,
    tie_break: TieBreak,
}

impl PartialView {
    /// Create an empty view using the default tie-break rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty view with an explicit tie-break rule for `get_oldest`.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            entries: BTreeMap::new(),
            tie_break,
        }
    }

    /// Tie-break rule in effect.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    // =========================================================================
    // Gossip-round primitives
    // =========================================================================

    /// Peer whose longest-standing reference is the oldest in the view.
    ///
    /// Ties are resolved by the configured [`TieBreak`].
    pub fn get_oldest(&self) -> Result<PeerId, ViewError> {
        let mut leader: Option<(&PeerId, Age)> = None;

        for (peer, entry) in &self.entries {
            let oldest = entry.oldest();
            let replace = match leader {
                Some((_, leader_age)) => self.tie_break.replaces(&oldest, &leader_age),
                None => true,
            };
            if replace {
                leader = Some((peer, oldest));
            }
        }

        leader
            .map(|(peer, _)| peer.clone())
            .ok_or_else(|| ViewError::empty_view("get_oldest"))
    }

    /// Age every reference of every peer by one round.
    pub fn increment(&mut self) {
        for entry in self.entries.values_mut() {
            entry.age_all();
        }
    }

    /// Insert a fresh (age 0) reference to `peer` as its newest reference.
    ///
    /// Never merges: repeated calls grow the peer's multiplicity.
    /// Returns the peer's multiplicity after insertion.
    pub fn add_neighbor(&mut self, peer: PeerId) -> usize {
        let entry = self
            .entries
            .entry(peer)
            .and_modify(NeighborEntry::push_newest)
            .or_insert_with(NeighborEntry::new);
        debug_assert!(entry.is_ordered());
        entry.multiplicity()
    }

    /// Remove the newest (smallest age) reference to `peer`.
    ///
    /// The peer is dropped from the view when this was its last reference.
    /// Returns the removed reference's age.
    pub fn remove_neighbor(&mut self, peer: &PeerId) -> Result<Age, ViewError> {
        let entry = self
            .entries
            .get_mut(peer)
            .ok_or_else(|| ViewError::peer_not_found("remove_neighbor", peer))?;

        let removed = entry
            .pop_newest()
            .ok_or_else(|| ViewError::peer_not_found("remove_neighbor", peer))?;

        if entry.is_empty() {
            self.entries.remove(peer);
        }

        Ok(removed)
    }

    /// Remove every reference to `peer` at once.
    ///
    /// Returns how many references the peer had.
    pub fn remove_all_neighbor(&mut self, peer: &PeerId) -> Result<usize, ViewError> {
        self.entries
            .remove(peer)
            .map(|entry| entry.multiplicity())
            .ok_or_else(|| ViewError::peer_not_found("remove_all_neighbor", peer))
    }

    /// A peer with the fewest references, chosen uniformly among all peers
    /// sharing that minimum.
    pub fn get_least_frequent<R>(&self, rng: &R) -> Result<PeerId, ViewError>
    where
        R: RandomSource + ?Sized,
    {
        let min = self
            .entries
            .values()
            .map(NeighborEntry::multiplicity)
            .min()
            .ok_or_else(|| ViewError::empty_view("get_least_frequent"))?;

        let candidates: Vec<&PeerId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.multiplicity() == min)
            .map(|(peer, _)| peer)
            .collect();

        let safe_index = rng.random_index(candidates.len()) % candidates.len();
        Ok(candidates[safe_index].clone())
    }

    // =========================================================================
    // Read-only queries
    // =========================================================================

    /// Number of distinct peers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view holds no peer.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of references across all peers.
    pub fn total_references(&self) -> usize {
        self.entries.values().map(NeighborEntry::multiplicity).sum()
    }

    /// Whether `peer` holds at least one reference.
    pub fn contains(&self, peer: &PeerId) -> bool {
        self.entries.contains_key(peer)
    }

    /// Number of references to `peer`; 0 when absent.
    pub fn multiplicity(&self, peer: &PeerId) -> usize {
        self.entries.get(peer).map_or(0, NeighborEntry::multiplicity)
    }

    /// Read-only view of a peer's references.
    pub fn entry(&self, peer: &PeerId) -> Option<&NeighborEntry> {
        self.entries.get(peer)
    }

    /// Peers and their entries in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&PeerId, &NeighborEntry)> {
        self.entries.iter()
    }

    /// Peers in encounter order.
    pub fn peers(&self) -> impl Iterator<Item = &PeerId> {
        self.entries.keys()
    }

    /// Aggregate figures.
    pub fn stats(&self) -> ViewStats {
        self.entries
            .values()
            .fold(ViewStats::default(), |mut stats, entry| {
                stats.peers += 1;
                stats.references += entry.multiplicity();
                stats.max_age = stats.max_age.max(entry.oldest());
                stats.max_multiplicity = stats.max_multiplicity.max(entry.multiplicity());
                stats
            })
    }

    /// Drop every reference.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
