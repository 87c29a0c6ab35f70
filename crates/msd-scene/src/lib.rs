//! `msd-scene` — cycle orchestration for the rust_msd framework.
//!
//! # Cycle flow
//!
//! ```text
//! perform_cycle(cycle):
//!   ① Plan     — match source lines, emit legs (pure; errors reject the
//!                cycle before anything moves)
//!   ② Pickup   — with tweezers enabled, one tweezer per active item
//!   ③ Legs     — for each leg in order: apply as one batch, then report
//!                it to the observer with its start time
//!   ④ Release  — destroy all tweezers
//! ```
//!
//! Cycles run strictly one after another; nothing is interleaved.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use msd_core::SceneConfig;
//! use msd_scene::{NoopObserver, SceneBuilder, Script};
//!
//! let mut scene = SceneBuilder::new(SceneConfig::default()).build()?;
//! scene.perform_column_cycle(&[1, 10], &[3, 7], &mut NoopObserver)?;
//! scene.run_script(&Script::msd_demo(), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scene;
pub mod script;

#[cfg(test)]
mod tests;

pub use builder::SceneBuilder;
pub use error::{SceneError, SceneResult};
pub use observer::{NoopObserver, SceneObserver};
pub use scene::{CycleReport, Scene};
pub use script::Script;
