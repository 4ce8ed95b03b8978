//! Simulation observer trait for progress reporting and data collection.

use park_core::{ArrivalId, SimTime, SpotId};

use crate::{PhaseKind, RunStats, SimView};

/// An arrival that was given a spot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrivalEvent {
    pub id:       ArrivalId,
    pub time:     SimTime,
    pub spot:     SpotId,
    /// Scheduled departure of the new occupant.
    pub leave_at: SimTime,
    pub phase:    PhaseKind,
}

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] as events are
/// processed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Each callback runs after the event
/// has been fully applied, so `view` already reflects it.
///
/// # Example — occupancy printer
///
/// ```rust,ignore
/// struct Occupancy;
///
/// impl SimObserver for Occupancy {
///     fn on_arrival(&mut self, ev: &ArrivalEvent, view: &SimView<'_>) {
///         println!("{}: {} taken, {} occupied", ev.time, ev.spot, view.occupancy.occupied_count());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once when the controller enters `phase`.
    fn on_phase_enter(&mut self, _phase: PhaseKind, _view: &SimView<'_>) {}

    /// Called after an arrival has been assigned a spot.
    fn on_arrival(&mut self, _event: &ArrivalEvent, _view: &SimView<'_>) {}

    /// Called for an arrival that found the lot full.
    fn on_rejected(&mut self, _id: ArrivalId, _time: SimTime, _view: &SimView<'_>) {}

    /// Called after a departure has freed its spot.
    fn on_departure(&mut self, _time: SimTime, _spot: SpotId, _view: &SimView<'_>) {}

    /// Called once after the run reaches `Done`.
    fn on_sim_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
