//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a count of simulated seconds since the
//! start of the run, stored as `f64`.  Inter-arrival gaps and stay durations
//! are exponential samples, so there is no natural tick to round to.
//!
//! `SimTime` is totally ordered (via `f64::total_cmp`) so it can key a
//! `BTreeMap`/`BTreeSet`.  Only finite values are ever constructed by the
//! simulator; a NaN would sort after every real time and is rejected in
//! debug builds.
//!
//! `SimClock` only moves forward, and only to the timestamp of the event
//! being processed.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in seconds since the run started.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap a number of seconds.
    #[inline]
    pub fn from_secs(secs: f64) -> SimTime {
        debug_assert!(secs.is_finite(), "SimTime must be finite, got {secs}");
        SimTime(secs)
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, secs: f64) -> SimTime {
        SimTime::from_secs(self.0 + secs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.  Monotonically non-decreasing.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Jump to the timestamp of the event about to be processed.
    ///
    /// # Panics
    /// Panics if `t` is earlier than the current time.  A backwards step
    /// means events were processed out of order.
    pub fn advance_to(&mut self, t: SimTime) {
        assert!(
            t >= self.now,
            "clock moved backwards: {} -> {}",
            self.now,
            t
        );
        self.now = t;
    }
}
