//! The `Scene` struct and its cycle loop.

use log::{debug, info, warn};

use msd_core::{Axis, CycleId, QubitId, SceneClock, SceneConfig};
use msd_lattice::Lattice;
use msd_motion::MoveExecutor;
use msd_plan::{Cycle, CyclePlan, CyclePlanner};

use crate::{SceneObserver, SceneResult, Script};

/// Summary of one executed cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleReport {
    pub id:         CycleId,
    pub axis:       Axis,
    pub active:     usize,
    pub legs:       usize,
    pub start_time: f32,
    pub end_time:   f32,
}

/// Holds the lattice and drives cycles against it.
///
/// Create via [`SceneBuilder`][crate::SceneBuilder].
pub struct Scene {
    /// Validated configuration the scene was built from.
    pub config: SceneConfig,

    /// Accumulated animation time.
    pub clock: SceneClock,

    /// Item positions.  Only `executor` writes them.
    pub lattice: Lattice,

    pub planner: CyclePlanner,

    pub executor: MoveExecutor,

    pub(crate) next_cycle: u32,
}

impl Scene {
    // ── Public API ────────────────────────────────────────────────────────

    /// Move items on `source` columns to the paired `target` columns and
    /// back along a trapezoidal detour.
    pub fn perform_column_cycle<O: SceneObserver>(
        &mut self,
        source:   &[u32],
        target:   &[u32],
        observer: &mut O,
    ) -> SceneResult<CycleReport> {
        let cycle = Cycle::columns(source, target)?;
        self.perform_cycle(&cycle, observer)
    }

    /// Move items on `source` rows to the paired `target` rows and back
    /// along an L-shaped detour.
    pub fn perform_row_cycle<O: SceneObserver>(
        &mut self,
        source:   &[u32],
        target:   &[u32],
        observer: &mut O,
    ) -> SceneResult<CycleReport> {
        let cycle = Cycle::rows(source, target)?;
        self.perform_cycle(&cycle, observer)
    }

    /// Plan and execute one cycle.
    ///
    /// A cycle that fails planning is rejected before any item moves.
    pub fn perform_cycle<O: SceneObserver>(
        &mut self,
        cycle:    &Cycle,
        observer: &mut O,
    ) -> SceneResult<CycleReport> {
        let plan = self.planner.plan(&self.lattice, cycle)?;
        self.execute_plan(&plan, observer)
    }

    /// Execute an already planned cycle.
    ///
    /// If a leg fails the cycle is aborted: legs applied before it stay
    /// committed, every tweezer is released and reported through
    /// `on_release`, and `on_cycle_end` is not called.
    pub(crate) fn execute_plan<O: SceneObserver>(
        &mut self,
        plan:     &CyclePlan,
        observer: &mut O,
    ) -> SceneResult<CycleReport> {
        let cycle = &plan.cycle;
        let id    = CycleId(self.next_cycle);
        self.next_cycle += 1;

        let start_time = self.clock.now();
        observer.on_cycle_start(id, cycle, &plan.active);

        if self.config.use_tweezers {
            self.pickup(id, plan, observer)?;
        }

        for (index, leg) in plan.legs.iter().enumerate() {
            if let Err(e) = self.executor.apply_leg(&mut self.lattice, leg) {
                warn!("cycle {} aborted at leg {index} ({}): {e}", id.0, leg.kind);
                self.release(id, observer);
                return Err(e.into());
            }
            let start = self.clock.advance(leg.duration);
            observer.on_leg(id, index, leg, start, &self.lattice);
        }

        self.release(id, observer);

        let report = CycleReport {
            id,
            axis:     cycle.axis(),
            active:   plan.active.len(),
            legs:     plan.legs.len(),
            start_time,
            end_time: self.clock.now(),
        };
        info!(
            "cycle {}: {} {:?} -> {:?}, {} items, {:.2}s..{:.2}s",
            id.0,
            report.axis,
            cycle.source(),
            cycle.target(),
            report.active,
            report.start_time,
            report.end_time,
        );
        observer.on_cycle_end(&report);
        Ok(report)
    }

    /// Advance scene time without moving anything.
    pub fn wait<O: SceneObserver>(&mut self, duration: f32, observer: &mut O) {
        let start = self.clock.advance(duration);
        observer.on_wait(start, duration);
    }

    /// Run every cycle of `script` in order, separated by the configured
    /// cycle pause.
    ///
    /// All cycles are validated up front, so a malformed script is rejected
    /// before the first item moves.
    pub fn run_script<O: SceneObserver>(
        &mut self,
        script:   &Script,
        observer: &mut O,
    ) -> SceneResult<Vec<CycleReport>> {
        let cycles = script.cycles()?;
        let timing = self.config.timing;

        self.wait(timing.settle, observer);

        let mut reports = Vec::with_capacity(cycles.len());
        for cycle in &cycles {
            reports.push(self.perform_cycle(cycle, observer)?);
            self.wait(timing.cycle_pause, observer);
        }

        info!("script finished: {} cycles, {}", reports.len(), self.clock);
        observer.on_scene_end(self.clock.now());
        Ok(reports)
    }

    /// `true` when every item sits on its home site within `tolerance`.
    pub fn at_rest(&self, tolerance: f32) -> bool {
        self.lattice.iter().all(|(id, pos)| {
            self.lattice
                .home_position(id)
                .is_some_and(|home| home.approx_eq(pos, tolerance))
        })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Destroy the cycle's tweezers when tweezers are in use.
    fn release<O: SceneObserver>(&mut self, id: CycleId, observer: &mut O) {
        if !self.config.use_tweezers {
            return;
        }
        let released = self.executor.release_all();
        let duration = self.config.timing.release;
        let start    = self.clock.advance(duration);
        observer.on_release(id, &released, start, duration);
    }

    fn pickup<O: SceneObserver>(
        &mut self,
        id:       CycleId,
        plan:     &CyclePlan,
        observer: &mut O,
    ) -> SceneResult<()> {
        let ids: Vec<QubitId> = plan.active_ids().collect();
        let grips    = self.executor.pickup(&self.lattice, &ids)?;
        let duration = self.config.timing.pickup;
        let start    = self.clock.advance(duration);
        debug!("cycle {}: {} tweezers picked up", id.0, grips.len());
        observer.on_pickup(id, &grips, start, duration);
        Ok(())
    }
}
