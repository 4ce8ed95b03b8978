//! Integration tests for park-output.

use park_core::{ArrivalId, SimConfig, SpotId};
use park_lot::{ParkingLot, SpotLayout};
use park_sim::{Comparison, ComparisonRow, ParamsSnapshot, RampRow, WindowRow};

fn reference_lot() -> ParkingLot {
    ParkingLot::from_config(SpotLayout::reference(), &SimConfig::default())
}

/// Nearest spot 0 (9 m, ~124.6 s) against farthest spot 49 (540 m, ~397.7 s).
fn extreme_comparison() -> Comparison {
    Comparison::evaluate(&reference_lot(), SpotId(0), SpotId(49))
}

fn window_row(id: u64, sim_time_s: f64) -> WindowRow {
    WindowRow {
        arrival_id:       ArrivalId(id),
        sim_time_s,
        occupancy_before: 43,
        comparison:       extreme_comparison(),
    }
}

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{COMPARISON_FILE, CsvWriter, PARAMS_FILE, RAMP_FILE, WINDOW_FILE};
    use crate::writer::{OutputWriter, write_output};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for name in [RAMP_FILE, COMPARISON_FILE, WINDOW_FILE, PARAMS_FILE] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_csv(&dir.path().join(RAMP_FILE));
        assert_eq!(
            headers,
            ["arrival_id", "chosen_spot", "x", "y", "floor", "drive_distance_m", "drive_time_s", "occupancy_after"]
        );
        assert!(rows.is_empty());

        let (headers, _) = read_csv(&dir.path().join(WINDOW_FILE));
        assert_eq!(headers.len(), 11);
        assert_eq!(&headers[..3], ["arrival_id", "sim_time_s", "occupancy_before"]);
    }

    #[test]
    fn ramp_rows_rounded_to_one_decimal() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = RampRow::capture(&reference_lot(), ArrivalId(1), SpotId(0), 1);
        w.write_ramp(&[row]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join(RAMP_FILE));
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(&r[0], "1");
        assert_eq!(&r[1], "0");
        assert_eq!((&r[2], &r[3], &r[4]), ("0", "1", "1"));
        assert_eq!(&r[5], "9.0");
        assert_eq!(&r[6], "124.6");
        assert_eq!(&r[7], "1");
    }

    #[test]
    fn missing_comparison_writes_header_only() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_comparison(None).unwrap();
        w.finish().unwrap();
        let (headers, rows) = read_csv(&dir.path().join(COMPARISON_FILE));
        assert_eq!(headers.len(), 9);
        assert!(rows.is_empty());
    }

    #[test]
    fn comparison_row_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = ComparisonRow { arrival_id: ArrivalId(26), comparison: extreme_comparison() };
        w.write_comparison(Some(&row)).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join(COMPARISON_FILE));
        let r = &rows[0];
        assert_eq!(&r[0], "26");
        assert_eq!(&r[1], "0");
        assert_eq!(&r[4], "49");
        assert_eq!(&r[5], "540.0");
        assert_eq!(&r[6], "397.7");
        assert_eq!(&r[7], "531.0");
        assert_eq!(&r[8], "273.1");
    }

    #[test]
    fn window_rows_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_window(&[window_row(50, 12.34), window_row(51, 2999.96)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join(WINDOW_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "50");
        assert_eq!(&rows[0][1], "12.3");
        assert_eq!(&rows[0][2], "43");
        assert_eq!(&rows[1][1], "3000.0");
    }

    #[test]
    fn params_row_lists_targets() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_params(&ParamsSnapshot::capture(&SimConfig::default(), 50)).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_csv(&dir.path().join(PARAMS_FILE));
        let value = |name: &str| {
            let i = headers.iter().position(|h| h == name).unwrap();
            rows[0][i].to_owned()
        };
        assert_eq!(value("seed"), "42");
        assert_eq!(value("ramp_target_count"), "25");
        assert_eq!(value("high_target_count"), "43");
        assert_eq!(value("total_spots"), "50");
        assert_eq!(value("window_multiplier"), "10");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn full_run_exports_every_record() {
        let dir = tmp();
        let output = park_sim::run_simulation(SimConfig::default()).unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_output(&mut w, &output).unwrap();

        assert_eq!(read_csv(&dir.path().join(RAMP_FILE)).1.len(), 25);
        assert_eq!(read_csv(&dir.path().join(COMPARISON_FILE)).1.len(), 1);
        assert_eq!(read_csv(&dir.path().join(WINDOW_FILE)).1.len(), output.window.len());
        assert_eq!(read_csv(&dir.path().join(PARAMS_FILE)).1.len(), 1);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("no/such/dir"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod summary_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::summary::{SUMMARY_FILE, SavingsFactors, SavingsSummary, percent_faster, write_summary_json};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn empty_window_is_all_zero() {
        let s = SavingsSummary::from_window(&[], SavingsFactors::default());
        assert_eq!(s.cars, 0);
        assert_eq!(s.avg_time_saved_s, 0.0);
        assert_eq!(s.mean_percent_faster, 0.0);
        assert_eq!(s.daily.fuel_saved_l, 0.0);
    }

    #[test]
    fn single_car_savings() {
        let s = SavingsSummary::from_window(&[window_row(1, 0.0)], SavingsFactors::default());
        assert_eq!(s.cars, 1);
        assert!(close(s.avg_distance_saved_m, 531.0));
        assert!(close(s.total_distance_saved_km, 0.531));
        assert!(close(s.avg_time_saved_s, 273.085714));
        assert!(close(s.mean_percent_faster, 68.663793));
        assert!(close(s.fuel_algo_l, 0.00072));
        assert!(close(s.fuel_worst_l, 0.0432));
        assert!(close(s.fuel_saved_l, 0.04248));
        assert!(close(s.co2_saved_kg, 0.097704));
    }

    #[test]
    fn daily_projection_scales_average() {
        let rows = [window_row(1, 0.0), window_row(2, 5.0)];
        let s = SavingsSummary::from_window(&rows, SavingsFactors::default());
        assert!(close(s.total_time_saved_min, 2.0 * 273.085714 / 60.0));
        assert_eq!(s.daily.cars_per_day, 600);
        assert!(close(s.daily.distance_saved_km, 318.6));
        assert!(close(s.daily.time_saved_h, 45.514286));
        assert!(close(s.daily.fuel_saved_l, 25.488));
        assert!(close(s.daily.co2_saved_kg, 58.6224));
    }

    #[test]
    fn custom_factors_applied() {
        let factors = SavingsFactors { fuel_l_per_km: 0.1, co2_kg_per_km: 0.2, cars_per_day: 100 };
        let s = SavingsSummary::from_window(&[window_row(1, 0.0)], factors);
        assert!(close(s.daily.distance_saved_km, 53.1));
        assert!(close(s.fuel_saved_l, 0.0531));
    }

    #[test]
    fn percent_faster_edges() {
        assert_eq!(percent_faster(10.0, 10.0), 0.0);
        assert_eq!(percent_faster(5.0, 0.0), 0.0);
        assert!(close(percent_faster(100.0, 10.0), -900.0));
        // Ratio 1 - 1000 = -999 is clipped to -500 before scaling.
        assert!(close(percent_faster(1000.0, 1.0), -50_000.0));
        assert!(close(percent_faster(25.0, 100.0), 75.0));
    }

    #[test]
    fn summary_json_written() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let output = park_sim::run_simulation(SimConfig::default()).unwrap();
        let summary = SavingsSummary::from_window(&output.window, SavingsFactors::default());
        write_summary_json(dir.path(), &output, &summary).unwrap();

        let text = std::fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["savings"]["cars"], output.window.len());
        assert_eq!(json["stats"]["arrivals"], output.stats.arrivals);
        assert_eq!(json["savings"]["factors"]["cars_per_day"], 600);
    }
}
