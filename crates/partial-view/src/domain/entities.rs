//! Core Domain Entities for the Partial View

use std::collections::VecDeque;
use std::fmt;

/// Opaque peer identifier.
///
/// The table never interprets the contents; it only compares and orders
/// identifiers. Ordering defines the encounter order of table scans.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId(String);

impl PeerId {
    /// Create a peer identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PeerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PeerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PeerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of gossip rounds elapsed since a reference was added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u64);

impl Age {
    /// A reference that was just added.
    pub const ZERO: Age = Age(0);

    /// Create an age from a round count.
    pub fn new(rounds: u64) -> Self {
        Self(rounds)
    }

    /// Get the number of rounds.
    pub fn as_rounds(&self) -> u64 {
        self.0
    }

    /// The age one round later. Saturates at `u64::MAX`.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All references a view holds to a single peer.
///
/// Ages are stored newest first: the front is the most recently added
/// reference (smallest age), the back the longest-standing one (largest age).
/// Every mutation keeps the sequence non-decreasing from front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborEntry {
    ages: VecDeque<Age>,
}

impl NeighborEntry {
    /// Create an entry holding a single fresh reference.
    pub fn new() -> Self {
        let mut ages = VecDeque::with_capacity(1);
        ages.push_front(Age::ZERO);
        Self { ages }
    }

    /// Add a fresh reference in front of every existing one.
    pub fn push_newest(&mut self) {
        self.ages.push_front(Age::ZERO);
    }

    /// Remove the most recently added reference.
    pub fn pop_newest(&mut self) -> Option<Age> {
        self.ages.pop_front()
    }

    /// Age every reference by one round, in place.
    pub fn age_all(&mut self) {
        for age in self.ages.iter_mut() {
            *age = age.next();
        }
    }

    /// Age of the longest-standing reference.
    ///
    /// Entries held by a view are never empty; an empty entry reports `Age::ZERO`.
    pub fn oldest(&self) -> Age {
        self.ages.back().copied().unwrap_or_default()
    }

    /// Age of the most recently added reference.
    pub fn newest(&self) -> Age {
        self.ages.front().copied().unwrap_or_default()
    }

    /// Number of independent references to this peer.
    pub fn multiplicity(&self) -> usize {
        self.ages.len()
    }

    /// Whether no reference remains.
    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Ages from newest to oldest reference.
    pub fn ages(&self) -> impl Iterator<Item = Age> + '_ {
        self.ages.iter().copied()
    }

    /// Whether ages are non-decreasing from newest to oldest.
    pub fn is_ordered(&self) -> bool {
        self.ages
            .iter()
            .zip(self.ages.iter().skip(1))
            .all(|(newer, older)| newer <= older)
    }
}

impl Default for NeighborEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate figures over a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStats {
    /// Number of distinct peers
    pub peers: usize,
    /// Number of references across all peers
    pub references: usize,
    /// Largest age held by any reference
    pub max_age: Age,
    /// Largest multiplicity of any single peer
    pub max_multiplicity: usize,
}
