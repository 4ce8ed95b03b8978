//! `park-output` — export of parking-lot simulation output.
//!
//! | Writer              | Files created                                        |
//! |---------------------|------------------------------------------------------|
//! | [`CsvWriter`]       | `arrivals_up_to_50.csv`, `comparison_after_50.csv`,  |
//! |                     | `window_comparisons.csv`, `params.csv`               |
//! | [`write_summary_json`] | `summary.json` (run stats + savings summary)      |
//!
//! Distances and times in the CSV files carry one decimal place.
//!
//! # Usage
//!
//! ```rust,ignore
//! use park_output::{CsvWriter, SavingsFactors, SavingsSummary, write_output, write_summary_json};
//!
//! let output = sim.run(&mut NoopObserver);
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_output(&mut writer, output)?;
//! let summary = SavingsSummary::from_window(&output.window, SavingsFactors::default());
//! write_summary_json(Path::new("./output"), output, &summary)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use summary::{DailyProjection, RunReport, SavingsFactors, SavingsSummary, write_summary_json};
pub use writer::{OutputWriter, write_output};
