//! Plain data row types written by trace backends.

use msd_core::Axis;
use msd_plan::LegKind;

/// One item's displacement during one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegMoveRow {
    pub cycle_id:   u32,
    pub leg_index:  u32,
    pub leg_kind:   LegKind,
    /// Scene time at which the leg starts, in seconds.
    pub start_time: f32,
    pub duration:   f32,
    pub qubit_id:   u32,
    pub dx:         f32,
    pub dy:         f32,
    /// Position after the leg has been committed.
    pub x:          f32,
    pub y:          f32,
}

/// Summary of one executed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSummaryRow {
    pub cycle_id:      u32,
    pub axis:          Axis,
    pub active_qubits: u64,
    pub legs:          u64,
    pub start_time:    f32,
    pub end_time:      f32,
}
