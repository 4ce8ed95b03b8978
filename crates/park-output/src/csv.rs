//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `arrivals_up_to_50.csv`
//! - `comparison_after_50.csv`
//! - `window_comparisons.csv`
//! - `params.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use park_sim::{ComparisonRow, ParamsSnapshot, RampRow, WindowRow};

use crate::OutputResult;
use crate::row::{
    COMPARISON_HEADER, PARAMS_HEADER, RAMP_HEADER, WINDOW_HEADER, comparison_record,
    params_record, ramp_record, window_record,
};
use crate::writer::OutputWriter;

pub const RAMP_FILE:       &str = "arrivals_up_to_50.csv";
pub const COMPARISON_FILE: &str = "comparison_after_50.csv";
pub const WINDOW_FILE:     &str = "window_comparisons.csv";
pub const PARAMS_FILE:     &str = "params.csv";

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    ramp:       Writer<File>,
    comparison: Writer<File>,
    window:     Writer<File>,
    params:     Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ramp = Writer::from_path(dir.join(RAMP_FILE))?;
        ramp.write_record(RAMP_HEADER)?;

        let mut comparison = Writer::from_path(dir.join(COMPARISON_FILE))?;
        comparison.write_record(COMPARISON_HEADER)?;

        let mut window = Writer::from_path(dir.join(WINDOW_FILE))?;
        window.write_record(WINDOW_HEADER)?;

        let mut params = Writer::from_path(dir.join(PARAMS_FILE))?;
        params.write_record(PARAMS_HEADER)?;

        Ok(Self {
            ramp,
            comparison,
            window,
            params,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_ramp(&mut self, rows: &[RampRow]) -> OutputResult<()> {
        for row in rows {
            self.ramp.write_record(&ramp_record(row))?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, row: Option<&ComparisonRow>) -> OutputResult<()> {
        if let Some(row) = row {
            self.comparison.write_record(&comparison_record(row))?;
        }
        Ok(())
    }

    fn write_window(&mut self, rows: &[WindowRow]) -> OutputResult<()> {
        for row in rows {
            self.window.write_record(&window_record(row))?;
        }
        Ok(())
    }

    fn write_params(&mut self, params: &ParamsSnapshot) -> OutputResult<()> {
        self.params.write_record(&params_record(params))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ramp.flush()?;
        self.comparison.flush()?;
        self.window.flush()?;
        self.params.flush()?;
        Ok(())
    }
}
