//! The `Sim` struct and its phase-driven event loop.

use tracing::{debug, info, trace};

use park_core::{ArrivalId, SimRng, SimTime, SpotId, UniformSource};
use park_lot::{select_best, select_worst};

use crate::context::SimContext;
use crate::observer::ArrivalEvent;
use crate::records::{Comparison, ComparisonRow, ParamsSnapshot, RampRow, SimOutput, WindowRow};
use crate::{Phase, PhaseKind, RunStats, SimObserver, SimView};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim` owns all run state and walks the phase machine:
///
/// 1. **InitialRamp**: nearest-spot arrivals until the first occupancy
///    target; every assignment is recorded.
/// 2. **SingleComparison**: one arrival priced against the farthest free
///    spot; only the nearest is assigned.
/// 3. **HighRamp**: unrecorded arrivals up to the high occupancy target.
/// 4. **ChurnWindow**: arrivals and departures in time order (departures
///    first on ties) until the window's right edge.  Each admitted arrival
///    is recorded as a comparison; full-lot arrivals are dropped.
///
/// No departure is processed before the churn window, so the ramps only
/// ever fill the lot.  Cars whose stay ended during the ramps leave as the
/// first window events, one per step, all at the window's start time; the
/// clock stays at `now` for them.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<U: UniformSource = SimRng> {
    ctx:     SimContext<U>,
    phase:   Phase,
    output:  SimOutput,
    started: bool,
}

impl<U: UniformSource> Sim<U> {
    pub(crate) fn new(ctx: SimContext<U>) -> Self {
        let capacity = ctx.lot.capacity();
        let params = ParamsSnapshot::capture(&ctx.config, capacity);
        let phase = Phase::InitialRamp { target: params.ramp_target };
        Self {
            ctx,
            phase,
            output: SimOutput::new(params),
            started: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run every phase to completion and return the captured records.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> &SimOutput {
        while self.step(observer) {}
        &self.output
    }

    /// Process one event or one phase transition.
    ///
    /// Returns `false` once the run has reached [`Phase::Done`].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if !self.started {
            self.started = true;
            debug!(phase = %self.phase.kind(), capacity = self.ctx.lot.capacity(), "run started");
            observer.on_phase_enter(self.phase.kind(), &self.ctx.view());
        }

        match self.phase {
            Phase::InitialRamp { target } => self.step_ramp(target, true, observer),
            Phase::SingleComparison => self.step_single_comparison(observer),
            Phase::HighRamp { target } => self.step_ramp(target, false, observer),
            Phase::ChurnWindow { start, end, next_arrival } => {
                self.step_window(start, end, next_arrival, observer)
            }
            Phase::Done => return false,
        }
        !self.phase.is_done()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.ctx.clock.now()
    }

    pub fn view(&self) -> SimView<'_> {
        self.ctx.view()
    }

    pub fn stats(&self) -> &RunStats {
        &self.ctx.stats
    }

    /// Records captured so far.  `stats` is filled in when the run finishes.
    pub fn output(&self) -> &SimOutput {
        &self.output
    }

    pub fn into_output(self) -> SimOutput {
        self.output
    }

    // ── Phase steps ───────────────────────────────────────────────────────

    /// One arrival of either ramp.  Departures are never processed here.
    fn step_ramp<O: SimObserver>(&mut self, target: usize, record: bool, observer: &mut O) {
        let occupancy = &self.ctx.occupancy;
        if occupancy.occupied_count() >= target || !occupancy.has_free() {
            self.finish_ramp(record, observer);
            return;
        }
        let Some(at) = self.ctx.sample_next_arrival() else {
            self.finish_ramp(record, observer);
            return;
        };

        self.ctx.clock.advance_to(at);
        let id = self.ctx.issue_arrival();
        let spot = select_best(&self.ctx.lot, self.ctx.occupancy.free());
        if record {
            let occupancy_after = self.ctx.occupancy.occupied_count() + 1;
            self.output
                .ramp
                .push(RampRow::capture(&self.ctx.lot, id, spot, occupancy_after));
        }
        let leave_at = self.ctx.assign(spot);
        self.emit_arrival(id, spot, leave_at, observer);
    }

    fn finish_ramp<O: SimObserver>(&mut self, recorded: bool, observer: &mut O) {
        let next = if recorded {
            Phase::SingleComparison
        } else {
            self.open_window()
        };
        self.enter(next, observer);
    }

    fn step_single_comparison<O: SimObserver>(&mut self, observer: &mut O) {
        if self.ctx.occupancy.has_free() {
            if let Some(at) = self.ctx.sample_next_arrival() {
                self.ctx.clock.advance_to(at);
                let id = self.ctx.issue_arrival();
                let free = self.ctx.occupancy.free();
                let best = select_best(&self.ctx.lot, free);
                let worst = select_worst(&self.ctx.lot, free);
                let comparison = Comparison::evaluate(&self.ctx.lot, best, worst);
                self.output.comparison = Some(ComparisonRow { arrival_id: id, comparison });

                let leave_at = self.ctx.assign(best);
                self.emit_arrival(id, best, leave_at, observer);
            }
        }
        let target = self.output.params.high_target;
        self.enter(Phase::HighRamp { target }, observer);
    }

    fn step_window<O: SimObserver>(
        &mut self,
        start:        SimTime,
        end:          SimTime,
        next_arrival: Option<SimTime>,
        observer:     &mut O,
    ) {
        let next_departure = self.ctx.departures.next_time();

        // Departures win ties so occupancy is never overstated.
        let (departure_first, at) = match (next_departure, next_arrival) {
            (Some(d), Some(a)) if d <= a => (true, d),
            (_, Some(a)) => (false, a),
            (Some(d), None) => (true, d),
            (None, None) => {
                self.enter(Phase::Done, observer);
                return;
            }
        };
        if at > end {
            trace!(next = %at, end = %end, "next event falls outside the window");
            self.enter(Phase::Done, observer);
            return;
        }

        if departure_first {
            if let Some((time, spot)) = self.ctx.process_departure() {
                trace!(%spot, now = %time, "departure");
                observer.on_departure(time, spot, &self.ctx.view());
            }
            return;
        }

        self.ctx.clock.advance_to(at);
        let id = self.ctx.issue_arrival();
        if self.ctx.occupancy.has_free() {
            let free = self.ctx.occupancy.free();
            let best = select_best(&self.ctx.lot, free);
            let worst = if free.len() > 1 {
                select_worst(&self.ctx.lot, free)
            } else {
                best
            };
            self.output.window.push(WindowRow {
                arrival_id:       id,
                sim_time_s:       at.since(start),
                occupancy_before: self.ctx.occupancy.occupied_count(),
                comparison:       Comparison::evaluate(&self.ctx.lot, best, worst),
            });
            let leave_at = self.ctx.assign(best);
            self.emit_arrival(id, best, leave_at, observer);
        } else {
            self.ctx.stats.rejected += 1;
            trace!(arrival = id.0, now = %at, "lot full, arrival dropped");
            observer.on_rejected(id, at, &self.ctx.view());
        }

        let next_arrival = self.ctx.sample_next_arrival();
        self.phase = Phase::ChurnWindow { start, end, next_arrival };
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Fix the window edges at the current time and draw its first arrival.
    fn open_window(&mut self) -> Phase {
        let start = self.ctx.clock.now();
        let end = start + self.ctx.config.window_duration_secs();
        self.ctx.stats.window_start = Some(start);
        self.ctx.stats.window_end = Some(end);
        let next_arrival = self.ctx.sample_next_arrival();
        Phase::ChurnWindow { start, end, next_arrival }
    }

    fn enter<O: SimObserver>(&mut self, next: Phase, observer: &mut O) {
        debug!(
            from = %self.phase.kind(),
            to = %next.kind(),
            now = %self.ctx.clock.now(),
            occupied = self.ctx.occupancy.occupied_count(),
            "phase transition"
        );
        self.phase = next;
        observer.on_phase_enter(next.kind(), &self.ctx.view());

        if next.kind() == PhaseKind::Done {
            self.ctx.stats.final_time = self.ctx.clock.now();
            self.output.stats = self.ctx.stats.clone();
            let stats = &self.output.stats;
            info!(
                arrivals = stats.arrivals,
                assigned = stats.assigned,
                rejected = stats.rejected,
                departures = stats.departures,
                ramp_rows = self.output.ramp.len(),
                window_rows = self.output.window.len(),
                final_time = %stats.final_time,
                "simulation complete"
            );
            observer.on_sim_end(stats);
        }
    }

    fn emit_arrival<O: SimObserver>(
        &mut self,
        id:       ArrivalId,
        spot:     SpotId,
        leave_at: SimTime,
        observer: &mut O,
    ) {
        let event = ArrivalEvent {
            id,
            time: self.ctx.clock.now(),
            spot,
            leave_at,
            phase: self.phase.kind(),
        };
        trace!(arrival = id.0, %spot, now = %event.time, leave_at = %leave_at, "arrival assigned");
        observer.on_arrival(&event, &self.ctx.view());
    }
}
