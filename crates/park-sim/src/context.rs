//! Mutable simulation state and its read-only view.
//!
//! All state a run mutates lives in one [`SimContext`], owned by the
//! [`Sim`][crate::Sim].  Nothing is global, so independent runs can share a
//! process.  Observers see it only through [`SimView`].

use park_core::{ArrivalId, SimClock, SimConfig, SimTime, SpotId, UniformSource};
use park_lot::{Occupancy, ParkingLot};
use park_schedule::{ArrivalProcess, DepartureQueue, StayProcess};

use crate::records::RunStats;

// ── SimContext ────────────────────────────────────────────────────────────────

/// Clock, lot state, pending departures, random processes, and counters.
pub struct SimContext<U: UniformSource> {
    pub(crate) config:       SimConfig,
    pub(crate) lot:          ParkingLot,
    pub(crate) occupancy:    Occupancy,
    pub(crate) departures:   DepartureQueue,
    pub(crate) clock:        SimClock,
    pub(crate) rng:          U,
    pub(crate) arrivals:     ArrivalProcess,
    pub(crate) stays:        StayProcess,
    pub(crate) last_arrival: ArrivalId,
    pub(crate) stats:        RunStats,
}

impl<U: UniformSource> SimContext<U> {
    pub(crate) fn new(config: SimConfig, lot: ParkingLot, rng: U) -> Self {
        let capacity = lot.capacity();
        Self {
            arrivals:     ArrivalProcess::from_config(&config),
            stays:        StayProcess::from_config(&config),
            config,
            lot,
            occupancy:    Occupancy::all_free(capacity),
            departures:   DepartureQueue::new(),
            clock:        SimClock::new(),
            rng,
            last_arrival: ArrivalId(0),
            stats:        RunStats::default(),
        }
    }

    pub fn view(&self) -> SimView<'_> {
        SimView {
            now:          self.clock.now(),
            lot:          &self.lot,
            occupancy:    &self.occupancy,
            departures:   &self.departures,
            last_arrival: self.last_arrival,
            stats:        &self.stats,
        }
    }

    // ── Event primitives ──────────────────────────────────────────────────

    /// Time of the next arrival counted from now, or `None` if none will come.
    ///
    /// Consumes one uniform draw unless the arrival process is degenerate.
    pub(crate) fn sample_next_arrival(&mut self) -> Option<SimTime> {
        let gap = self.arrivals.next_gap(&mut self.rng)?;
        Some(self.clock.now() + gap)
    }

    /// Issue the next arrival id.  Rejected arrivals consume an id too.
    pub(crate) fn issue_arrival(&mut self) -> ArrivalId {
        self.last_arrival = self.last_arrival.next();
        self.stats.arrivals += 1;
        self.stats.events += 1;
        self.last_arrival
    }

    /// Occupy `spot` and schedule its departure, as one step.
    ///
    /// Consumes one uniform draw for the stay duration.
    pub(crate) fn assign(&mut self, spot: SpotId) -> SimTime {
        self.occupancy.occupy(spot);
        let leave_at = self.clock.now() + self.stays.sample(&mut self.rng);
        self.departures.push_departure(leave_at, spot);
        self.stats.assigned += 1;
        leave_at
    }

    /// Pop the earliest departure, advance the clock to it, and free the spot.
    ///
    /// A departure that fell due before `now` (its stay ended during a ramp)
    /// is released at `now` and the clock does not move.  The returned time
    /// is the one the release happened at.
    pub(crate) fn process_departure(&mut self) -> Option<(SimTime, SpotId)> {
        let (due, spot) = self.departures.pop_next_departure()?;
        let time = due.max(self.clock.now());
        self.clock.advance_to(time);
        let released = self.occupancy.release(spot);
        debug_assert!(released, "{spot} departed without being occupied");
        self.stats.departures += 1;
        self.stats.events += 1;
        Some((time, spot))
    }
}

// ── SimView ───────────────────────────────────────────────────────────────────

/// Read-only snapshot of the simulation handed to observers.
#[derive(Copy, Clone)]
pub struct SimView<'a> {
    pub now:          SimTime,
    pub lot:          &'a ParkingLot,
    pub occupancy:    &'a Occupancy,
    pub departures:   &'a DepartureQueue,
    /// Most recently issued arrival id (`ArrivalId(0)` before the first).
    pub last_arrival: ArrivalId,
    pub stats:        &'a RunStats,
}

impl SimView<'_> {
    /// `true` if free/occupied partition the lot and each occupied spot has
    /// exactly one pending departure while each free spot has none.
    pub fn invariants_hold(&self) -> bool {
        self.occupancy.is_partition()
            && self.departures.len() == self.occupancy.occupied_count()
            && self
                .occupancy
                .occupied()
                .iter()
                .all(|&s| self.departures.pending_for(s).is_some())
    }
}
