//! Free/occupied partition of the lot.
//!
//! Every spot id in `[0, capacity)` is in exactly one of the two sets at all
//! times.  Both sets are `BTreeSet`s so iteration order, and therefore every
//! downstream choice, is deterministic.

use std::collections::BTreeSet;

use park_core::SpotId;

/// Which spots are free and which are taken.
#[derive(Clone, Debug)]
pub struct Occupancy {
    free:     BTreeSet<SpotId>,
    occupied: BTreeSet<SpotId>,
    capacity: usize,
}

impl Occupancy {
    /// A lot of `capacity` spots, all free.
    pub fn all_free(capacity: usize) -> Self {
        Self {
            free:     (0..capacity as u32).map(SpotId).collect(),
            occupied: BTreeSet::new(),
            capacity,
        }
    }

    #[inline]
    pub fn free(&self) -> &BTreeSet<SpotId> {
        &self.free
    }

    #[inline]
    pub fn occupied(&self) -> &BTreeSet<SpotId> {
        &self.occupied
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    #[inline]
    pub fn has_free(&self) -> bool {
        !self.free.is_empty()
    }

    #[inline]
    pub fn is_free(&self, spot: SpotId) -> bool {
        self.free.contains(&spot)
    }

    /// Move `spot` from free to occupied.
    ///
    /// # Panics
    /// Panics if `spot` is not currently free.
    pub fn occupy(&mut self, spot: SpotId) {
        assert!(self.free.remove(&spot), "{spot} is not free");
        self.occupied.insert(spot);
    }

    /// Move `spot` from occupied to free.
    ///
    /// Returns `false` (and changes nothing) if `spot` was not occupied.
    pub fn release(&mut self, spot: SpotId) -> bool {
        if !self.occupied.remove(&spot) {
            return false;
        }
        self.free.insert(spot);
        true
    }

    /// `true` if the two sets are disjoint and together cover `[0, capacity)`.
    pub fn is_partition(&self) -> bool {
        self.free.len() + self.occupied.len() == self.capacity
            && self.free.is_disjoint(&self.occupied)
            && self
                .free
                .iter()
                .chain(self.occupied.iter())
                .all(|s| s.index() < self.capacity)
    }
}
