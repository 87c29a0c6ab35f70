//! `TraceObserver<W>` — bridges `SceneObserver` to a `TraceWriter`.

use log::warn;

use msd_core::CycleId;
use msd_lattice::Lattice;
use msd_plan::Leg;
use msd_scene::{CycleReport, SceneObserver};

use crate::row::{CycleSummaryRow, LegMoveRow};
use crate::writer::TraceWriter;
use crate::OutputError;

/// A [`SceneObserver`] that records every leg and cycle summary to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because `SceneObserver`
/// methods have no return value.  After the scene returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer without waiting for the end of a script.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the scene).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("trace write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SceneObserver for TraceObserver<W> {
    fn on_leg(&mut self, cycle: CycleId, index: usize, leg: &Leg, start: f32, lattice: &Lattice) {
        let rows: Vec<LegMoveRow> = leg
            .moves
            .iter()
            .filter_map(|m| {
                let pos = lattice.position_of(m.id)?;
                Some(LegMoveRow {
                    cycle_id:   cycle.0,
                    leg_index:  index as u32,
                    leg_kind:   leg.kind,
                    start_time: start,
                    duration:   leg.duration,
                    qubit_id:   m.id.0,
                    dx:         m.dx,
                    dy:         m.dy,
                    x:          pos.x,
                    y:          pos.y,
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_leg_moves(&rows);
            self.store_err(result);
        }
    }

    fn on_cycle_end(&mut self, report: &CycleReport) {
        let row = CycleSummaryRow {
            cycle_id:      report.id.0,
            axis:          report.axis,
            active_qubits: report.active as u64,
            legs:          report.legs as u64,
            start_time:    report.start_time,
            end_time:      report.end_time,
        };
        let result = self.writer.write_cycle_summary(&row);
        self.store_err(result);
    }

    fn on_scene_end(&mut self, _elapsed: f32) {
        self.finish();
    }
}
