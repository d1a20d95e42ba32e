//! # Domain Invariants
//!
//! Rules that must hold for every view after every operation.

use super::entities::NeighborEntry;
use super::partial_view::PartialView;

/// Invariant: ages within an entry are non-decreasing from newest to oldest.
pub fn invariant_entry_ordered(entry: &NeighborEntry) -> bool {
    entry.is_ordered()
}

/// Invariant: no peer is kept with an empty reference sequence.
pub fn invariant_no_empty_entries(view: &PartialView) -> bool {
    view.iter().all(|(_, entry)| !entry.is_empty())
}

/// Invariant: every entry in the view is ordered.
pub fn invariant_view_ordered(view: &PartialView) -> bool {
    view.iter().all(|(_, entry)| invariant_entry_ordered(entry))
}

/// Invariant: the view holds exactly the number of references a caller tracked.
pub fn invariant_reference_count(view: &PartialView, expected: usize) -> bool {
    view.total_references() == expected
}
