//! Phase state machine.
//!
//! ```text
//! InitialRamp ──▶ SingleComparison ──▶ HighRamp ──▶ ChurnWindow ──▶ Done
//! ```
//!
//! Transitions only move forward.  Each variant carries just the data its
//! step needs.

use std::fmt;

use park_core::SimTime;

/// The controller's current phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    /// Nearest-spot arrivals, recorded, until `target` spots are occupied or
    /// the lot is full.
    InitialRamp { target: usize },
    /// One more arrival, recorded as a best-vs-worst comparison.
    SingleComparison,
    /// Unrecorded nearest-spot arrivals until `target` spots are occupied.
    /// No departures are processed.
    HighRamp { target: usize },
    /// Arrivals and departures interleaved in time order until `end`.
    /// Departures that fell due during the ramps are released first, at
    /// `start`, without moving the clock.
    ChurnWindow {
        start:        SimTime,
        end:          SimTime,
        /// `None` once the arrival process can produce no more arrivals.
        next_arrival: Option<SimTime>,
    },
    Done,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::InitialRamp { .. } => PhaseKind::InitialRamp,
            Phase::SingleComparison => PhaseKind::SingleComparison,
            Phase::HighRamp { .. } => PhaseKind::HighRamp,
            Phase::ChurnWindow { .. } => PhaseKind::ChurnWindow,
            Phase::Done => PhaseKind::Done,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Phase::Done)
    }
}

/// Data-free label for a [`Phase`], used by observers and logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhaseKind {
    InitialRamp,
    SingleComparison,
    HighRamp,
    ChurnWindow,
    Done,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::InitialRamp      => "initial_ramp",
            PhaseKind::SingleComparison => "single_comparison",
            PhaseKind::HighRamp         => "high_ramp",
            PhaseKind::ChurnWindow      => "churn_window",
            PhaseKind::Done             => "done",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
