//! Integration tests for msd-scene.

use msd_core::{CycleId, LatticeConfig, QubitId, SceneConfig, Vec2};
use msd_lattice::{GroupMatch, Lattice, LatticeBuilder};
use msd_motion::Tweezer;
use msd_plan::{Cycle, Leg, LegKind};

use crate::{CycleReport, NoopObserver, Scene, SceneBuilder, SceneObserver, Script};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scene(use_tweezers: bool) -> Scene {
    SceneBuilder::new(SceneConfig::default())
        .use_tweezers(use_tweezers)
        .build()
        .unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Start(CycleId, usize),
    Pickup(usize),
    Leg(LegKind, f32),
    Release(usize),
    Wait(f32),
    End(CycleId),
    SceneEnd,
}

/// Observer that records every callback in order.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    /// Position of `probe` after each leg, if set.
    probe:  Option<QubitId>,
    trail:  Vec<Vec2>,
}

impl SceneObserver for Recorder {
    fn on_cycle_start(&mut self, cycle: CycleId, _spec: &Cycle, active: &[GroupMatch]) {
        self.events.push(Event::Start(cycle, active.len()));
    }

    fn on_pickup(&mut self, _c: CycleId, tweezers: &[Tweezer], _s: f32, _d: f32) {
        self.events.push(Event::Pickup(tweezers.len()));
    }

    fn on_leg(&mut self, _c: CycleId, _i: usize, leg: &Leg, start: f32, lattice: &Lattice) {
        self.events.push(Event::Leg(leg.kind, start));
        if let Some(p) = self.probe {
            self.trail.push(lattice.position_of(p).unwrap());
        }
    }

    fn on_release(&mut self, _c: CycleId, tweezers: &[Tweezer], _s: f32, _d: f32) {
        self.events.push(Event::Release(tweezers.len()));
    }

    fn on_wait(&mut self, _start: f32, duration: f32) {
        self.events.push(Event::Wait(duration));
    }

    fn on_cycle_end(&mut self, report: &CycleReport) {
        self.events.push(Event::End(report.id));
    }

    fn on_scene_end(&mut self, _elapsed: f32) {
        self.events.push(Event::SceneEnd);
    }
}

fn snapshot(scene: &Scene) -> Vec<Vec2> {
    scene.lattice.iter().map(|(_, p)| p).collect()
}

// ── SceneBuilder validation ───────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SceneError;

    #[test]
    fn builds_demo_lattice_by_default() {
        let s = scene(false);
        assert_eq!(s.lattice.len(), 85);
        assert_eq!(s.clock.now(), 0.0);
        assert!(s.at_rest(1e-6));
    }

    #[test]
    fn invalid_config_rejected() {
        let mut cfg = SceneConfig::default();
        cfg.detour.offset_fraction = 0.0;
        assert!(matches!(SceneBuilder::new(cfg).build(), Err(SceneError::Config(_))));
    }

    #[test]
    fn prebuilt_lattice_dimensions_checked() {
        let lat = LatticeBuilder::new(3, 3, 0.7).build().unwrap();
        let result = SceneBuilder::new(SceneConfig::default()).lattice(lat).build();
        assert!(matches!(result, Err(SceneError::LatticeMismatch { got_rows: 3, .. })));
    }

    #[test]
    fn prebuilt_lattice_used_when_matching() {
        let lat = LatticeBuilder::new(5, 17, 0.7).vacancy(0, 0).build().unwrap();
        let s = SceneBuilder::new(SceneConfig::default()).lattice(lat).build().unwrap();
        assert_eq!(s.lattice.len(), 84);
    }
}

// ── Cycles ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cycle_tests {
    use super::*;
    use crate::SceneError;

    #[test]
    fn column_cycle_round_trip() {
        for tweezers in [false, true] {
            let mut s = scene(tweezers);
            let before = snapshot(&s);
            let report = s
                .perform_column_cycle(&[1, 10, 12, 13], &[3, 7, 14, 16], &mut NoopObserver)
                .unwrap();
            assert_eq!(report.active, 4 * 5);
            assert_eq!(report.legs, 7);
            for (a, b) in before.iter().zip(snapshot(&s)) {
                assert!(a.approx_eq(b, 1e-4));
            }
            assert!(s.at_rest(1e-4));
            assert!(s.executor.tweezers.is_empty());
        }
    }

    #[test]
    fn row_cycle_round_trip() {
        let mut s = scene(true);
        let report = s.perform_row_cycle(&[2, 4], &[1, 3], &mut NoopObserver).unwrap();
        assert_eq!(report.active, 2 * 17);
        assert_eq!(report.legs, 5);
        assert!(s.at_rest(1e-4));
    }

    #[test]
    fn single_row_scenario_has_four_active_items() {
        let cfg = SceneConfig {
            lattice: LatticeConfig::grid(1, 17, 0.7),
            ..SceneConfig::default()
        };
        let mut s = SceneBuilder::new(cfg).build().unwrap();
        let report = s
            .perform_column_cycle(&[1, 10, 12, 13], &[3, 7, 14, 16], &mut NoopObserver)
            .unwrap();
        assert_eq!(report.active, 4);
    }

    #[test]
    fn length_mismatch_rejected_before_motion() {
        let mut s = scene(false);
        let mut rec = Recorder::default();
        let result = s.perform_column_cycle(&[1, 2], &[3], &mut rec);
        assert!(matches!(result, Err(SceneError::Plan(_))));
        assert!(rec.events.is_empty());
        assert_eq!(s.clock.now(), 0.0);
    }

    #[test]
    fn observer_sees_transit_position() {
        let mut s = scene(false);
        let probe = s.lattice.qubit_at(0, 1).unwrap();
        let start = s.lattice.position_of(probe).unwrap();
        let mut rec = Recorder { probe: Some(probe), ..Recorder::default() };
        s.perform_column_cycle(&[1], &[3], &mut rec).unwrap();

        let offset = 0.3 * 0.7;
        let after_transit = rec.trail[1];
        assert!((after_transit.x - (start.x + 2.0 * 0.7 - offset)).abs() < 1e-4);
        assert!(rec.trail[6].approx_eq(start, 1e-4));
    }

    #[test]
    fn event_order_with_tweezers() {
        let mut s = scene(true);
        let mut rec = Recorder::default();
        s.perform_row_cycle(&[0], &[1], &mut rec).unwrap();

        let names: Vec<&str> = rec
            .events
            .iter()
            .map(|e| match e {
                Event::Start(..)   => "start",
                Event::Pickup(_)   => "pickup",
                Event::Leg(..)     => "leg",
                Event::Release(_)  => "release",
                Event::Wait(_)     => "wait",
                Event::End(_)      => "end",
                Event::SceneEnd    => "scene_end",
            })
            .collect();
        assert_eq!(
            names,
            vec!["start", "pickup", "leg", "leg", "leg", "leg", "leg", "release", "end"]
        );
        assert_eq!(rec.events[1], Event::Pickup(17));
        assert_eq!(rec.events[7], Event::Release(17));
    }

    #[test]
    fn leg_start_times_accumulate() {
        let mut s = scene(false);
        let mut rec = Recorder::default();
        let report = s.perform_column_cycle(&[0], &[1], &mut rec).unwrap();

        let starts: Vec<f32> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Leg(_, t) => Some(*t),
                _ => None,
            })
            .collect();
        let expected = [0.0, 0.05, 0.25, 0.30, 0.40, 0.45, 0.65];
        for (got, want) in starts.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} vs {want}");
        }
        assert!((report.end_time - 0.70).abs() < 1e-5);
    }

    #[test]
    fn cycle_ids_increase() {
        let mut s = scene(false);
        let a = s.perform_row_cycle(&[0], &[1], &mut NoopObserver).unwrap();
        let b = s.perform_row_cycle(&[1], &[0], &mut NoopObserver).unwrap();
        assert_eq!(a.id, CycleId(0));
        assert_eq!(b.id, CycleId(1));
        assert!(b.start_time >= a.end_time);
    }

    #[test]
    fn failing_leg_aborts_cycle_and_releases_tweezers() {
        let mut s = scene(true);
        let cycle = Cycle::rows(&[0], &[1]).unwrap();
        let mut plan = s.planner.plan(&s.lattice, &cycle).unwrap();
        // A second entry for the same item makes the transit leg invalid.
        let first = plan.legs[1].moves[0];
        plan.legs[1].moves.push(first);

        let mut rec = Recorder::default();
        let result = s.execute_plan(&plan, &mut rec);
        assert!(matches!(result, Err(SceneError::Motion(_))));
        assert!(s.executor.tweezers.is_empty());

        assert_eq!(rec.events[0], Event::Start(CycleId(0), 17));
        assert_eq!(rec.events[1], Event::Pickup(17));
        assert!(matches!(rec.events[2], Event::Leg(LegKind::DetourOut, _)));
        assert_eq!(rec.events[3], Event::Release(17));
        assert!(!rec.events.iter().any(|e| matches!(e, Event::End(_))));
        assert_eq!(rec.events.len(), 4);
    }

    #[test]
    fn vacant_source_site_drops_one_item() {
        let cfg = SceneConfig {
            lattice: LatticeConfig {
                use_vacancies: true,
                vacancies: vec![[3, 12]],
                ..LatticeConfig::default()
            },
            ..SceneConfig::default()
        };
        let mut s = SceneBuilder::new(cfg).build().unwrap();
        let report = s
            .perform_column_cycle(&[1, 10, 12, 13], &[3, 7, 14, 16], &mut NoopObserver)
            .unwrap();
        assert_eq!(report.active, 4 * 5 - 1);
        assert!(s.at_rest(1e-4));
    }
}

// ── Scripts ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod script_tests {
    use msd_plan::CycleSpec;

    use super::*;

    #[test]
    fn demo_script_shape() {
        let script = Script::msd_demo();
        assert_eq!(script.len(), 8);
        assert_eq!(script.cycles().unwrap().len(), 8);
    }

    #[test]
    fn demo_script_returns_to_rest() {
        for tweezers in [false, true] {
            let mut s = scene(tweezers);
            let mut rec = Recorder::default();
            let reports = s.run_script(&Script::msd_demo(), &mut rec).unwrap();
            assert_eq!(reports.len(), 8);
            assert!(s.at_rest(1e-3));
            assert_eq!(rec.events.last(), Some(&Event::SceneEnd));
            // Settle wait plus one pause after every cycle.
            let waits = rec.events.iter().filter(|e| matches!(e, Event::Wait(_))).count();
            assert_eq!(waits, 9);
        }
    }

    #[test]
    fn malformed_script_rejected_up_front() {
        let mut script = Script::msd_demo();
        script.push(CycleSpec::rows(&[0, 1], &[2]));
        let mut s = scene(false);
        let mut rec = Recorder::default();
        assert!(s.run_script(&script, &mut rec).is_err());
        assert!(rec.events.is_empty());
        assert!(s.at_rest(1e-6));
    }
}
