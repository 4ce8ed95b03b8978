//! `ParkingLot` — a layout paired with the cost model that prices it.

use std::cmp::Ordering;

use park_core::{SimConfig, SpotId};

use crate::{CostModel, Spot, SpotCost, SpotLayout};

/// The lot as the simulator sees it: where every spot is, and what it
/// costs to drive there.
#[derive(Clone, Debug)]
pub struct ParkingLot {
    layout: SpotLayout,
    model:  CostModel,
}

impl ParkingLot {
    pub fn new(layout: SpotLayout, model: CostModel) -> Self {
        Self { layout, model }
    }

    /// Convenience: the lot described by `layout`, priced with `config`.
    pub fn from_config(layout: SpotLayout, config: &SimConfig) -> Self {
        Self::new(layout, CostModel::from_config(config))
    }

    #[inline]
    pub fn layout(&self) -> &SpotLayout {
        &self.layout
    }

    #[inline]
    pub fn model(&self) -> &CostModel {
        &self.model
    }

    /// Total number of spots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn spot(&self, id: SpotId) -> Spot {
        self.layout.spot(id)
    }

    /// Distance and drive time for `id`.
    #[inline]
    pub fn cost(&self, id: SpotId) -> SpotCost {
        self.model.cost(self.layout.spot(id))
    }

    /// Compare two spots by `(base distance, id)`.
    ///
    /// The id tie-break makes every ranking a total order, so selection is
    /// reproducible regardless of set iteration order.
    pub fn rank(&self, a: SpotId, b: SpotId) -> Ordering {
        let da = self.model.base_distance_m(self.layout.spot(a));
        let db = self.model.base_distance_m(self.layout.spot(b));
        da.total_cmp(&db).then(a.cmp(&b))
    }
}
