//! The `OutputWriter` trait implemented by backend writers.

use park_sim::{ComparisonRow, ParamsSnapshot, RampRow, SimOutput, WindowRow};

use crate::OutputResult;

/// One method per record set, plus `finish`.
pub trait OutputWriter {
    fn write_ramp(&mut self, rows: &[RampRow]) -> OutputResult<()>;

    /// `None` when the run never reached the single comparison.
    fn write_comparison(&mut self, row: Option<&ComparisonRow>) -> OutputResult<()>;

    fn write_window(&mut self, rows: &[WindowRow]) -> OutputResult<()>;

    fn write_params(&mut self, params: &ParamsSnapshot) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every record set of `output` through `writer`, then finish it.
pub fn write_output<W: OutputWriter>(writer: &mut W, output: &SimOutput) -> OutputResult<()> {
    writer.write_ramp(&output.ramp)?;
    writer.write_comparison(output.comparison.as_ref())?;
    writer.write_window(&output.window)?;
    writer.write_params(&output.params)?;
    writer.finish()
}
