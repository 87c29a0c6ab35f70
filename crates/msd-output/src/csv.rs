//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `leg_moves.csv`
//! - `cycle_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{CycleSummaryRow, LegMoveRow, OutputResult};

pub const LEG_MOVE_HEADER: [&str; 10] = [
    "cycle_id", "leg_index", "leg_kind", "start_time", "duration",
    "qubit_id", "dx", "dy", "x", "y",
];

pub const CYCLE_SUMMARY_HEADER: [&str; 6] = [
    "cycle_id", "axis", "active_qubits", "legs", "start_time", "end_time",
];

/// Writes a scene trace to two CSV files.
pub struct CsvTraceWriter {
    moves:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut moves = Writer::from_path(dir.join("leg_moves.csv"))?;
        moves.write_record(LEG_MOVE_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("cycle_summaries.csv"))?;
        summaries.write_record(CYCLE_SUMMARY_HEADER)?;

        Ok(Self { moves, summaries, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_leg_moves(&mut self, rows: &[LegMoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.cycle_id.to_string(),
                row.leg_index.to_string(),
                row.leg_kind.as_str().to_owned(),
                format!("{:.4}", row.start_time),
                format!("{:.4}", row.duration),
                row.qubit_id.to_string(),
                format!("{:.6}", row.dx),
                format!("{:.6}", row.dy),
                format!("{:.6}", row.x),
                format!("{:.6}", row.y),
            ])?;
        }
        Ok(())
    }

    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.cycle_id.to_string(),
            row.axis.as_str().to_owned(),
            row.active_qubits.to_string(),
            row.legs.to_string(),
            format!("{:.4}", row.start_time),
            format!("{:.4}", row.end_time),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
