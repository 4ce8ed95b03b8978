//! Output records emitted by the simulation.
//!
//! Rows are plain values captured at the instant of the event they describe.
//! The simulator only ever appends them; nothing mutates a row after it has
//! been emitted.
//!
//! | Series             | Row type           | Emitted during       |
//! |--------------------|--------------------|----------------------|
//! | ramp arrivals      | [`RampRow`]        | `InitialRamp`        |
//! | single comparison  | [`ComparisonRow`]  | `SingleComparison`   |
//! | window comparisons | [`WindowRow`]      | `ChurnWindow`        |
//! | parameters         | [`ParamsSnapshot`] | once, at build time  |

use park_core::{ArrivalId, SimConfig, SimTime, SpotId};
use park_lot::{ParkingLot, SpotCost};

// ── Building blocks ───────────────────────────────────────────────────────────

/// A spot together with what it costs to drive there.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotChoice {
    pub spot: SpotId,
    pub cost: SpotCost,
}

impl SpotChoice {
    pub fn price(lot: &ParkingLot, spot: SpotId) -> Self {
        Self { spot, cost: lot.cost(spot) }
    }
}

/// Nearest-spot choice versus the farthest free spot for the same arrival.
///
/// Only `best` is ever assigned; `worst` is the hypothetical alternative.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub best:             SpotChoice,
    pub worst:            SpotChoice,
    /// `worst.distance - best.distance`; never negative.
    pub delta_distance_m: f64,
    /// `worst.drive_time - best.drive_time`; never negative.
    pub delta_time_s:     f64,
}

impl Comparison {
    pub fn evaluate(lot: &ParkingLot, best: SpotId, worst: SpotId) -> Self {
        let best = SpotChoice::price(lot, best);
        let worst = SpotChoice::price(lot, worst);
        Self {
            best,
            worst,
            delta_distance_m: worst.cost.distance_m - best.cost.distance_m,
            delta_time_s:     worst.cost.drive_time_s - best.cost.drive_time_s,
        }
    }
}

// ── Row types ─────────────────────────────────────────────────────────────────

/// One assignment made while ramping up to the first occupancy target.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampRow {
    pub arrival_id:      ArrivalId,
    pub spot:            SpotId,
    pub column:          u32,
    pub row:             u32,
    pub floor:           u32,
    pub distance_m:      f64,
    pub drive_time_s:    f64,
    /// Occupied spots once this vehicle has parked.
    pub occupancy_after: usize,
}

impl RampRow {
    pub fn capture(lot: &ParkingLot, arrival_id: ArrivalId, spot: SpotId, occupancy_after: usize) -> Self {
        let pos = lot.spot(spot);
        let cost = lot.cost(spot);
        Self {
            arrival_id,
            spot,
            column:       pos.column,
            row:          pos.row,
            floor:        pos.floor,
            distance_m:   cost.distance_m,
            drive_time_s: cost.drive_time_s,
            occupancy_after,
        }
    }
}

/// The single best-vs-worst comparison right after the first ramp.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    pub arrival_id: ArrivalId,
    pub comparison: Comparison,
}

/// One admitted arrival inside the churn window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRow {
    pub arrival_id:       ArrivalId,
    /// Seconds since the window opened.
    pub sim_time_s:       f64,
    /// Occupied spots just before this vehicle parked.
    pub occupancy_before: usize,
    pub comparison:       Comparison,
}

/// Every constant the run used, for provenance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamsSnapshot {
    pub config:        SimConfig,
    pub total_spots:   usize,
    pub ramp_target:   usize,
    pub high_target:   usize,
}

impl ParamsSnapshot {
    pub fn capture(config: &SimConfig, total_spots: usize) -> Self {
        Self {
            config: config.clone(),
            total_spots,
            ramp_target: config.ramp_target(total_spots),
            high_target: config.high_target(total_spots),
        }
    }
}

// ── Run statistics ────────────────────────────────────────────────────────────

/// Counters accumulated over a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Arrival ids issued, admitted or not.
    pub arrivals:     u64,
    pub assigned:     u64,
    /// Arrivals turned away because the lot was full.
    pub rejected:     u64,
    pub departures:   u64,
    /// Arrivals plus departures actually processed.
    pub events:       u64,
    pub window_start: Option<SimTime>,
    pub window_end:   Option<SimTime>,
    pub final_time:   SimTime,
}

// ── SimOutput ─────────────────────────────────────────────────────────────────

/// The four captured series plus run statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimOutput {
    pub ramp:       Vec<RampRow>,
    pub comparison: Option<ComparisonRow>,
    pub window:     Vec<WindowRow>,
    pub params:     ParamsSnapshot,
    pub stats:      RunStats,
}

impl SimOutput {
    pub(crate) fn new(params: ParamsSnapshot) -> Self {
        Self {
            ramp:       Vec::new(),
            comparison: None,
            window:     Vec::new(),
            params,
            stats:      RunStats::default(),
        }
    }
}
