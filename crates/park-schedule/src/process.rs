//! Random processes driving the simulation: arrival gaps and stay durations.
//!
//! Both are exponential samples drawn by inverse CDF from one uniform value:
//!
//! ```text
//! x = -ln(1 - u) * mean        u ∈ [0, 1)
//! ```
//!
//! Each sample consumes exactly one draw from the shared [`UniformSource`],
//! so the draw order (and therefore the run) is fixed by the seed.

use park_core::{SimConfig, UniformSource};

/// Largest `f64` strictly below 1.0.
const ONE_MINUS_ULP: f64 = 1.0 - f64::EPSILON / 2.0;

/// `-ln(1 - u)`, kept strictly positive.
///
/// `u == 0` would give exactly 0; clamping the tail below 1 maps it to the
/// smallest representable positive sample instead.
#[inline]
fn unit_exponential(u: f64) -> f64 {
    let tail = (1.0 - u).clamp(f64::MIN_POSITIVE, ONE_MINUS_ULP);
    -tail.ln()
}

// ── ArrivalProcess ────────────────────────────────────────────────────────────

/// Poisson arrival process: exponential inter-arrival gaps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrivalProcess {
    rate_per_sec: f64,
}

impl ArrivalProcess {
    pub fn new(rate_per_sec: f64) -> Self {
        Self { rate_per_sec }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.arrivals_per_sec())
    }

    #[inline]
    pub fn rate_per_sec(&self) -> f64 {
        self.rate_per_sec
    }

    /// `true` if the rate cannot produce arrivals (zero, negative, or NaN).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.rate_per_sec > 0.0 && self.rate_per_sec.is_finite())
    }

    /// Seconds until the next arrival, or `None` if no arrival will ever come.
    ///
    /// A degenerate process returns `None` without consuming a draw.
    pub fn next_gap<U: UniformSource + ?Sized>(&self, rng: &mut U) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(unit_exponential(rng.next_uniform()) / self.rate_per_sec)
    }
}

// ── StayProcess ───────────────────────────────────────────────────────────────

/// Shifted exponential stay: `max(min, Exp(mean))`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StayProcess {
    mean_secs: f64,
    min_secs:  f64,
}

impl StayProcess {
    pub fn new(mean_secs: f64, min_secs: f64) -> Self {
        Self { mean_secs, min_secs }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.stay_mean_secs, config.stay_min_secs)
    }

    #[inline]
    pub fn mean_secs(&self) -> f64 {
        self.mean_secs
    }

    #[inline]
    pub fn min_secs(&self) -> f64 {
        self.min_secs
    }

    /// Sample one stay duration in seconds.
    pub fn sample<U: UniformSource + ?Sized>(&self, rng: &mut U) -> f64 {
        let raw = unit_exponential(rng.next_uniform()) * self.mean_secs;
        raw.max(self.min_secs)
    }
}
