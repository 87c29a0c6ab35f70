//! The `TraceWriter` trait implemented by all backend writers.

use crate::{CycleSummaryRow, LegMoveRow, OutputResult};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write the per-item rows of one leg.
    fn write_leg_moves(&mut self, rows: &[LegMoveRow]) -> OutputResult<()>;

    /// Write one cycle summary row.
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
