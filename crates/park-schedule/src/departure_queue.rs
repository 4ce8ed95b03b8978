//! `DepartureQueue` — time-ordered queue of pending departures.
//!
//! # Why only departures
//!
//! The next arrival depends on when the previous one was processed, so
//! arrivals are sampled on demand by the phase controller.  Departures are
//! known the moment a spot is taken, so they are queued here.
//!
//! # Ordering
//!
//! Entries are kept in a `BTreeSet<(SimTime, SpotId)>`: earliest time first,
//! lower spot id first among equal times.  A side index maps each spot to
//! its pending departure so "one departure per occupied spot" can be checked
//! in O(log N).

use std::collections::{BTreeMap, BTreeSet};

use park_core::{SimTime, SpotId};

/// A min-queue of `(departure time, spot)` pairs with at most one entry per spot.
#[derive(Default, Debug, Clone)]
pub struct DepartureQueue {
    inner:   BTreeSet<(SimTime, SpotId)>,
    by_spot: BTreeMap<SpotId, SimTime>,
}

impl DepartureQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `spot` to be vacated at `time`.
    ///
    /// # Panics
    /// Panics if `spot` already has a pending departure.  A spot is only
    /// occupied once between departures, so a second entry means the caller
    /// assigned an occupied spot.
    pub fn push_departure(&mut self, time: SimTime, spot: SpotId) {
        if let Some(existing) = self.by_spot.insert(spot, time) {
            panic!("{spot} already departs at {existing}");
        }
        self.inner.insert((time, spot));
    }

    /// The earliest pending departure, without removing it.
    pub fn peek_next_departure(&self) -> Option<(SimTime, SpotId)> {
        self.inner.first().copied()
    }

    /// Remove and return the earliest pending departure.
    pub fn pop_next_departure(&mut self) -> Option<(SimTime, SpotId)> {
        let next = self.inner.pop_first()?;
        self.by_spot.remove(&next.1);
        Some(next)
    }

    /// Time of the earliest pending departure, or `None` if empty.
    #[inline]
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.first().map(|&(t, _)| t)
    }

    /// Pending departure time for `spot`, if any.
    #[inline]
    pub fn pending_for(&self, spot: SpotId) -> Option<SimTime> {
        self.by_spot.get(&spot).copied()
    }

    /// Spots with a pending departure, in id order.
    pub fn scheduled_spots(&self) -> impl Iterator<Item = SpotId> + '_ {
        self.by_spot.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
