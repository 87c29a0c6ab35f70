//! Rendering-collaborator callbacks.

use msd_core::CycleId;
use msd_lattice::{GroupMatch, Lattice};
use msd_motion::Tweezer;
use msd_plan::{Cycle, Leg};

use crate::CycleReport;

/// Callbacks invoked by [`Scene`][crate::Scene] while it executes cycles.
///
/// This is the only coupling between the choreography core and whatever
/// renders it.  Implementors interpolate each leg over its duration and may
/// draw tweezers; they receive read-only views and cannot alter planned
/// displacements.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — leg counter
///
/// ```rust,ignore
/// struct LegCounter(usize);
///
/// impl SceneObserver for LegCounter {
///     fn on_leg(&mut self, _c: CycleId, _i: usize, _leg: &Leg, _t: f32, _l: &Lattice) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SceneObserver {
    /// Called after planning, before anything moves.
    fn on_cycle_start(&mut self, _cycle: CycleId, _spec: &Cycle, _active: &[GroupMatch]) {}

    /// Called once tweezers have been placed on every active item.
    fn on_pickup(&mut self, _cycle: CycleId, _tweezers: &[Tweezer], _start: f32, _duration: f32) {}

    /// Called after leg `index` has been committed.
    ///
    /// `lattice` already shows the post-leg positions; each item moved from
    /// `position - (dx, dy)` over `leg.duration` seconds starting at `start`.
    fn on_leg(
        &mut self,
        _cycle:   CycleId,
        _index:   usize,
        _leg:     &Leg,
        _start:   f32,
        _lattice: &Lattice,
    ) {}

    /// Called after every tweezer of the cycle has been destroyed.
    fn on_release(&mut self, _cycle: CycleId, _tweezers: &[Tweezer], _start: f32, _duration: f32) {}

    /// Called for pauses between cycles and at scene start.
    fn on_wait(&mut self, _start: f32, _duration: f32) {}

    fn on_cycle_end(&mut self, _report: &CycleReport) {}

    /// Called once after a script completes.
    fn on_scene_end(&mut self, _elapsed: f32) {}
}

/// A [`SceneObserver`] that does nothing.
pub struct NoopObserver;

impl SceneObserver for NoopObserver {}
