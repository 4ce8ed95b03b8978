//! Run configuration.
//!
//! Every constant a run depends on lives in [`SimConfig`], so the full set
//! can be echoed into the parameter snapshot for provenance.  Lengths keep
//! the centimetre units of the lot survey; the cost model converts to
//! metres.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// `Default` reproduces the reference experiment: a 50-minute churn window
/// after ramping a 50-spot lot to 85 % occupancy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Mean arrival rate of the Poisson process, in vehicles per minute.
    pub arrivals_per_min: f64,

    /// Mean of the exponential stay duration, before flooring.
    pub stay_mean_secs: f64,
    /// Lower bound applied to every sampled stay.
    pub stay_min_secs: f64,

    /// Driving speed inside the lot.
    pub drive_speed_kmh: f64,
    /// Edge length of one grid cell.
    pub cell_cm: f64,
    /// Extra distance per floor above the ground floor (the connecting ramp).
    pub floor_penalty_cm: f64,
    /// Aisle/turn factor applied to the grid distance.
    pub path_multiplier: f64,
    /// Gate, slow-down and parking manoeuvre, added to every drive.
    pub fixed_overhead_secs: f64,

    /// Occupancy fraction reached by the first (recorded) ramp.
    pub target_ramp_fraction: f64,
    /// Occupancy fraction reached before the churn window opens.
    pub target_high_fraction: f64,

    /// Base length of the churn window.
    pub window_secs: f64,
    /// The window runs for `window_secs * window_multiplier`.
    pub window_multiplier: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                 42,
            arrivals_per_min:     6.0,
            stay_mean_secs:       150.0,
            stay_min_secs:        60.0,
            drive_speed_kmh:      7.0,
            cell_cm:              300.0,
            floor_penalty_cm:     15_000.0,
            path_multiplier:      3.0,
            fixed_overhead_secs:  120.0,
            target_ramp_fraction: 0.50,
            target_high_fraction: 0.85,
            window_secs:          300.0,
            window_multiplier:    10,
        }
    }
}

impl SimConfig {
    /// Driving speed converted to metres per second.
    #[inline]
    pub fn drive_speed_mps(&self) -> f64 {
        self.drive_speed_kmh * 1000.0 / 3600.0
    }

    /// Arrival rate converted to vehicles per second.
    #[inline]
    pub fn arrivals_per_sec(&self) -> f64 {
        self.arrivals_per_min / 60.0
    }

    /// Total simulated length of the churn window.
    #[inline]
    pub fn window_duration_secs(&self) -> f64 {
        self.window_secs * self.window_multiplier as f64
    }

    /// Occupied-spot count that ends the first ramp, `ceil(total * fraction)`.
    pub fn ramp_target(&self, total_spots: usize) -> usize {
        target_count(total_spots, self.target_ramp_fraction)
    }

    /// Occupied-spot count that ends the second ramp.
    pub fn high_target(&self, total_spots: usize) -> usize {
        target_count(total_spots, self.target_high_fraction)
    }

    /// Check every constant before a run starts.
    ///
    /// A configuration that passes cannot produce infinite, negative, or NaN
    /// timings.
    pub fn validate(&self) -> CoreResult<()> {
        positive("arrivals_per_min", self.arrivals_per_min)?;
        positive("stay_mean_secs", self.stay_mean_secs)?;
        non_negative("stay_min_secs", self.stay_min_secs)?;
        positive("drive_speed_kmh", self.drive_speed_kmh)?;
        positive("cell_cm", self.cell_cm)?;
        non_negative("floor_penalty_cm", self.floor_penalty_cm)?;
        positive("path_multiplier", self.path_multiplier)?;
        non_negative("fixed_overhead_secs", self.fixed_overhead_secs)?;
        fraction("target_ramp_fraction", self.target_ramp_fraction)?;
        fraction("target_high_fraction", self.target_high_fraction)?;
        positive("window_secs", self.window_secs)?;

        if self.window_multiplier == 0 {
            return Err(CoreError::NonPositive { field: "window_multiplier", value: 0.0 });
        }
        if self.target_high_fraction < self.target_ramp_fraction {
            return Err(CoreError::Config(format!(
                "target_high_fraction ({}) is below target_ramp_fraction ({})",
                self.target_high_fraction, self.target_ramp_fraction
            )));
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn target_count(total_spots: usize, fraction: f64) -> usize {
    let raw = (total_spots as f64 * fraction).ceil();
    (raw.max(0.0) as usize).min(total_spots)
}

fn finite(field: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> CoreResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> CoreResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Negative { field, value })
    }
}

fn fraction(field: &'static str, value: f64) -> CoreResult<()> {
    finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(CoreError::Fraction { field, value })
    }
}
