//! Spot selection policies.
//!
//! # Pluggability
//!
//! `park-sim` evaluates candidates through the [`SelectionPolicy`] trait.
//! Two policies ship with the crate: [`NearestSpot`] (the assignment being
//! evaluated) and [`FarthestSpot`] (the worst case it is compared with).
//!
//! Both are O(|free|) scans; the lot is small enough that no index is kept.
//!
//! # Empty sets
//!
//! [`select_best`] and [`select_worst`] panic on an empty free set: callers
//! must check for capacity first, and reaching one of these with no free
//! spot means a phase was sequenced incorrectly.  The trait method returns
//! `Option` for callers that prefer to branch.

use std::collections::BTreeSet;

use park_core::SpotId;

use crate::ParkingLot;

// ── SelectionPolicy trait ─────────────────────────────────────────────────────

/// Chooses one spot from the currently free set.
pub trait SelectionPolicy {
    /// Short label used in logs and output columns.
    fn name(&self) -> &'static str;

    /// Pick a member of `free`, or `None` if `free` is empty.
    fn choose(&self, lot: &ParkingLot, free: &BTreeSet<SpotId>) -> Option<SpotId>;
}

/// Minimises `(distance, id)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestSpot;

impl SelectionPolicy for NearestSpot {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn choose(&self, lot: &ParkingLot, free: &BTreeSet<SpotId>) -> Option<SpotId> {
        free.iter().copied().min_by(|&a, &b| lot.rank(a, b))
    }
}

/// Maximises `(distance, id)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct FarthestSpot;

impl SelectionPolicy for FarthestSpot {
    fn name(&self) -> &'static str {
        "farthest"
    }

    fn choose(&self, lot: &ParkingLot, free: &BTreeSet<SpotId>) -> Option<SpotId> {
        free.iter().copied().max_by(|&a, &b| lot.rank(a, b))
    }
}

// ── Checked entry points ──────────────────────────────────────────────────────

/// The nearest free spot.
///
/// # Panics
/// Panics if `free` is empty.
pub fn select_best(lot: &ParkingLot, free: &BTreeSet<SpotId>) -> SpotId {
    NearestSpot
        .choose(lot, free)
        .unwrap_or_else(|| panic!("select_best called with an empty free set"))
}

/// The farthest free spot.
///
/// # Panics
/// Panics if `free` is empty.
pub fn select_worst(lot: &ParkingLot, free: &BTreeSet<SpotId>) -> SpotId {
    FarthestSpot
        .choose(lot, free)
        .unwrap_or_else(|| panic!("select_worst called with an empty free set"))
}
