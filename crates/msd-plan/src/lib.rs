//! `msd-plan` — cycles, legs, and the detour cycle planner.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`cycle`]   | `Cycle` (validated source → target pairing), `CycleSpec`   |
//! | [`leg`]     | `Leg`, `LegKind`, `Displacement`                           |
//! | [`planner`] | `CyclePlanner`, `CyclePlan`                                |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                               |
//!
//! # Choreography (summary)
//!
//! Every item in a cycle first steps off its line by a shared perpendicular
//! offset, so all crossing transits happen on one common detour line.  A
//! column cycle (trapezoid) runs:
//!
//! ```text
//! DetourOut ↓  Transit →  DetourIn ↑  Dwell  DetourOut ↓  Return ←  DetourIn ↑
//! ```
//!
//! A row cycle (L-shape) runs:
//!
//! ```text
//! DetourOut →  Transit ↕  Dwell  Return ↕  DetourIn ←
//! ```
//!
//! Both end with every item back at its starting position.

pub mod cycle;
pub mod error;
pub mod leg;
pub mod planner;

#[cfg(test)]
mod tests;

pub use cycle::{Cycle, CycleSpec};
pub use error::{PlanError, PlanResult};
pub use leg::{Displacement, Leg, LegKind};
pub use planner::{CyclePlan, CyclePlanner};
