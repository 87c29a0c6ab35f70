//! `msd-output` — scene trace writers for the rust_msd framework.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `leg_moves.csv`, `cycle_summaries.csv`          |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `msd_scene::SceneObserver`.  Every row of `leg_moves.csv`
//! carries the displacement, the post-leg position, and the time window over
//! which to interpolate it, which is enough to replay item motion.  Tweezer
//! pickups, releases, and pauses are not traced.
//!
//! # Usage
//!
//! ```rust,ignore
//! use msd_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! scene.run_script(&Script::msd_demo(), &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CycleSummaryRow, LegMoveRow};
pub use writer::TraceWriter;
