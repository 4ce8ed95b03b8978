//! Drive-cost model: spot position → driving distance and time.
//!
//! ```text
//! base_m      = (column + row) * cell_m + floors_above_ground * floor_penalty_m
//! effective_m = base_m * path_multiplier
//! drive_s     = fixed_overhead_s + effective_m / speed_mps
//! ```
//!
//! The model is a pure function of the spot and the configuration constants.

use park_core::SimConfig;

use crate::Spot;

/// Distance and time to reach one spot from the entrance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotCost {
    /// Effective driving distance (grid distance × path multiplier), metres.
    pub distance_m:   f64,
    /// Overhead plus travel time at the lot speed, seconds.
    pub drive_time_s: f64,
}

/// Fixed constants of the drive-cost formula, in SI units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostModel {
    pub cell_m:           f64,
    pub floor_penalty_m:  f64,
    pub path_multiplier:  f64,
    pub speed_mps:        f64,
    pub fixed_overhead_s: f64,
}

impl CostModel {
    /// Extract the cost constants from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            cell_m:           config.cell_cm / 100.0,
            floor_penalty_m:  config.floor_penalty_cm / 100.0,
            path_multiplier:  config.path_multiplier,
            speed_mps:        config.drive_speed_mps(),
            fixed_overhead_s: config.fixed_overhead_secs,
        }
    }

    /// Straight grid distance to `spot`, including ramp penalties.
    ///
    /// This is also the key the selection policies rank spots by.
    #[inline]
    pub fn base_distance_m(&self, spot: Spot) -> f64 {
        spot.grid_cells() as f64 * self.cell_m
            + spot.floors_above_ground() as f64 * self.floor_penalty_m
    }

    #[inline]
    pub fn effective_distance_m(&self, spot: Spot) -> f64 {
        self.base_distance_m(spot) * self.path_multiplier
    }

    #[inline]
    pub fn drive_time_s(&self, spot: Spot) -> f64 {
        self.fixed_overhead_s + self.effective_distance_m(spot) / self.speed_mps
    }

    pub fn cost(&self, spot: Spot) -> SpotCost {
        SpotCost {
            distance_m:   self.effective_distance_m(spot),
            drive_time_s: self.drive_time_s(spot),
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
