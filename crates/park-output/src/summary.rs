//! Aggregate savings over the churn-window comparisons.
//!
//! For each window arrival the nearest spot is compared with the farthest
//! free one.  The summary totals what the nearest-spot policy saves in
//! time, distance, fuel, and CO2, and scales the per-car averages to a
//! day of traffic.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use park_sim::{RunStats, SimOutput, WindowRow};

use crate::OutputResult;

pub const SUMMARY_FILE: &str = "summary.json";

/// The `1 - best / worst` ratio is clipped to this magnitude before it is
/// scaled to percent.
const PERCENT_CLIP: f64 = 500.0;

// ── SavingsFactors ────────────────────────────────────────────────────────────

/// Conversion factors for fuel, emissions, and daily projection.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SavingsFactors {
    pub fuel_l_per_km: f64,
    pub co2_kg_per_km: f64,
    pub cars_per_day:  u32,
}

impl Default for SavingsFactors {
    fn default() -> Self {
        Self {
            fuel_l_per_km: 0.08,
            co2_kg_per_km: 0.184,
            cars_per_day:  600,
        }
    }
}

// ── SavingsSummary ────────────────────────────────────────────────────────────

/// Per-day impact if every car saved the window average.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyProjection {
    pub cars_per_day:      u32,
    pub time_saved_h:      f64,
    pub distance_saved_km: f64,
    pub fuel_saved_l:      f64,
    pub co2_saved_kg:      f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavingsSummary {
    /// Window arrivals the summary is computed over.
    pub cars:                    usize,
    pub avg_time_saved_s:        f64,
    pub total_time_saved_min:    f64,
    pub avg_distance_saved_m:    f64,
    pub total_distance_saved_km: f64,
    /// Mean of `100 * (1 - best_time / worst_time)` per car.
    pub mean_percent_faster:     f64,
    pub fuel_algo_l:             f64,
    pub fuel_worst_l:            f64,
    pub fuel_saved_l:            f64,
    pub co2_saved_kg:            f64,
    pub daily:                   DailyProjection,
    pub factors:                 SavingsFactors,
}

impl SavingsSummary {
    /// Summarise `rows`.  An empty slice yields an all-zero summary.
    pub fn from_window(rows: &[WindowRow], factors: SavingsFactors) -> Self {
        let mut time_saved_s = 0.0;
        let mut distance_saved_m = 0.0;
        let mut percent_sum = 0.0;
        let mut algo_m = 0.0;
        let mut worst_m = 0.0;

        for row in rows {
            let c = &row.comparison;
            time_saved_s += c.delta_time_s;
            distance_saved_m += c.delta_distance_m;
            percent_sum += percent_faster(c.best.cost.drive_time_s, c.worst.cost.drive_time_s);
            algo_m += c.best.cost.distance_m;
            worst_m += c.worst.cost.distance_m;
        }

        let cars = rows.len();
        let mean = |total: f64| if cars == 0 { 0.0 } else { total / cars as f64 };
        let avg_time_saved_s = mean(time_saved_s);
        let avg_distance_saved_m = mean(distance_saved_m);

        let daily_distance_km = avg_distance_saved_m * factors.cars_per_day as f64 / 1000.0;
        let daily = DailyProjection {
            cars_per_day:      factors.cars_per_day,
            time_saved_h:      avg_time_saved_s * factors.cars_per_day as f64 / 3600.0,
            distance_saved_km: daily_distance_km,
            fuel_saved_l:      daily_distance_km * factors.fuel_l_per_km,
            co2_saved_kg:      daily_distance_km * factors.co2_kg_per_km,
        };

        let fuel_algo_l = algo_m / 1000.0 * factors.fuel_l_per_km;
        let fuel_worst_l = worst_m / 1000.0 * factors.fuel_l_per_km;
        Self {
            cars,
            avg_time_saved_s,
            total_time_saved_min:    time_saved_s / 60.0,
            avg_distance_saved_m,
            total_distance_saved_km: distance_saved_m / 1000.0,
            mean_percent_faster:     mean(percent_sum),
            fuel_algo_l,
            fuel_worst_l,
            fuel_saved_l:            fuel_worst_l - fuel_algo_l,
            co2_saved_kg:            distance_saved_m / 1000.0 * factors.co2_kg_per_km,
            daily,
            factors,
        }
    }
}

/// How much faster `best` is than `worst`, in percent of `worst`.
///
/// A non-positive `worst` gives 0.  The ratio `1 - best / worst` is clipped
/// to ±500 first, so the result lies within ±50 000.
pub fn percent_faster(best_s: f64, worst_s: f64) -> f64 {
    if worst_s <= 0.0 {
        return 0.0;
    }
    100.0 * (1.0 - best_s / worst_s).clamp(-PERCENT_CLIP, PERCENT_CLIP)
}

// ── Report file ───────────────────────────────────────────────────────────────

/// Contents of `summary.json`.
#[derive(Serialize)]
pub struct RunReport<'a> {
    pub stats:   &'a RunStats,
    pub savings: &'a SavingsSummary,
}

/// Write the run statistics and `summary` as pretty JSON to
/// `dir/summary.json`.
pub fn write_summary_json(
    dir:     &Path,
    output:  &SimOutput,
    summary: &SavingsSummary,
) -> OutputResult<()> {
    let report = RunReport { stats: &output.stats, savings: summary };
    let mut file = BufWriter::new(File::create(dir.join(SUMMARY_FILE))?);
    serde_json::to_writer_pretty(&mut file, &report)?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}
