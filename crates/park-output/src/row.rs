//! Flattening of simulation records into text fields.
//!
//! Distances and times are written with one decimal place; ids and counts
//! are written as plain integers.

use park_sim::{Comparison, ComparisonRow, ParamsSnapshot, RampRow, WindowRow};

pub const RAMP_HEADER: [&str; 8] = [
    "arrival_id",
    "chosen_spot",
    "x",
    "y",
    "floor",
    "drive_distance_m",
    "drive_time_s",
    "occupancy_after",
];

pub const COMPARISON_HEADER: [&str; 9] = [
    "arrival_id",
    "algo_spot",
    "algo_drive_distance_m",
    "algo_drive_time_s",
    "worst_spot",
    "worst_drive_distance_m",
    "worst_drive_time_s",
    "delta_distance_m",
    "delta_time_s",
];

pub const WINDOW_HEADER: [&str; 11] = [
    "arrival_id",
    "sim_time_s",
    "occupancy_before",
    "algo_spot",
    "algo_drive_distance_m",
    "algo_drive_time_s",
    "worst_spot",
    "worst_drive_distance_m",
    "worst_drive_time_s",
    "delta_distance_m",
    "delta_time_s",
];

pub const PARAMS_HEADER: [&str; 14] = [
    "seed",
    "arrivals_per_min",
    "drive_speed_kmh",
    "cell_cm",
    "floor_penalty_cm",
    "path_multiplier",
    "fixed_overhead_secs",
    "stay_mean_secs",
    "stay_min_secs",
    "ramp_target_count",
    "high_target_count",
    "window_secs",
    "window_multiplier",
    "total_spots",
];

/// `x` with exactly one decimal place.
pub fn one_decimal(x: f64) -> String {
    format!("{x:.1}")
}

pub fn ramp_record(row: &RampRow) -> [String; 8] {
    [
        row.arrival_id.0.to_string(),
        row.spot.0.to_string(),
        row.column.to_string(),
        row.row.to_string(),
        row.floor.to_string(),
        one_decimal(row.distance_m),
        one_decimal(row.drive_time_s),
        row.occupancy_after.to_string(),
    ]
}

/// The eight best/worst/delta fields shared by the comparison tables.
fn comparison_fields(c: &Comparison) -> [String; 8] {
    [
        c.best.spot.0.to_string(),
        one_decimal(c.best.cost.distance_m),
        one_decimal(c.best.cost.drive_time_s),
        c.worst.spot.0.to_string(),
        one_decimal(c.worst.cost.distance_m),
        one_decimal(c.worst.cost.drive_time_s),
        one_decimal(c.delta_distance_m),
        one_decimal(c.delta_time_s),
    ]
}

pub fn comparison_record(row: &ComparisonRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(COMPARISON_HEADER.len());
    fields.push(row.arrival_id.0.to_string());
    fields.extend(comparison_fields(&row.comparison));
    fields
}

pub fn window_record(row: &WindowRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(WINDOW_HEADER.len());
    fields.push(row.arrival_id.0.to_string());
    fields.push(one_decimal(row.sim_time_s));
    fields.push(row.occupancy_before.to_string());
    fields.extend(comparison_fields(&row.comparison));
    fields
}

/// Parameters are written unrounded.
pub fn params_record(params: &ParamsSnapshot) -> [String; 14] {
    let c = &params.config;
    [
        c.seed.to_string(),
        c.arrivals_per_min.to_string(),
        c.drive_speed_kmh.to_string(),
        c.cell_cm.to_string(),
        c.floor_penalty_cm.to_string(),
        c.path_multiplier.to_string(),
        c.fixed_overhead_secs.to_string(),
        c.stay_mean_secs.to_string(),
        c.stay_min_secs.to_string(),
        params.ramp_target.to_string(),
        params.high_target.to_string(),
        c.window_secs.to_string(),
        c.window_multiplier.to_string(),
        params.total_spots.to_string(),
    ]
}
