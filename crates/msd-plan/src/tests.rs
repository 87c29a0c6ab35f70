//! Unit tests for msd-plan.

use msd_core::{DetourConfig, QubitId, Timing, TransitSkew, Vec2};
use msd_lattice::{Lattice, LatticeBuilder};

use crate::{Cycle, CyclePlan, CyclePlanner, LegKind, PlanError};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SPACING: f32 = 0.7;

fn demo_lattice() -> Lattice {
    LatticeBuilder::new(5, 17, SPACING).build().unwrap()
}

fn planner() -> CyclePlanner {
    CyclePlanner::new(DetourConfig::default(), Timing::default())
}

fn kinds(plan: &CyclePlan) -> Vec<LegKind> {
    plan.legs.iter().map(|l| l.kind).collect()
}

/// Position of `id` after the first `n` legs, from its starting position.
fn after_legs(lattice: &Lattice, plan: &CyclePlan, id: QubitId, n: usize) -> Vec2 {
    plan.legs[..n]
        .iter()
        .fold(lattice.position_of(id).unwrap(), |p, leg| p + leg.displacement_of(id))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── Cycle validation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod cycle {
    use super::*;

    #[test]
    fn pairs_by_position() {
        let c = Cycle::columns(&[1, 10, 12, 13], &[3, 7, 14, 16]).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.target_of(10), Some(7));
        assert_eq!(c.target_of(13), Some(16));
        assert_eq!(c.target_of(3), None);
        let pairs: Vec<_> = c.pairs().collect();
        assert_eq!(pairs, vec![(1, 3), (10, 7), (12, 14), (13, 16)]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = Cycle::rows(&[1, 2, 3], &[0, 1]).unwrap_err();
        assert_eq!(err, PlanError::LengthMismatch { source_len: 3, target_len: 2 });
    }

    #[test]
    fn duplicates_rejected() {
        assert_eq!(
            Cycle::columns(&[1, 1], &[2, 3]).unwrap_err(),
            PlanError::DuplicateSource(1)
        );
        assert_eq!(
            Cycle::columns(&[1, 2], &[3, 3]).unwrap_err(),
            PlanError::DuplicateTarget(3)
        );
    }

    #[test]
    fn swap_is_a_valid_bijection() {
        // Source and target may share values as long as each side is unique.
        assert!(Cycle::rows(&[2, 4], &[4, 2]).is_ok());
    }

    #[test]
    fn spec_conversion_validates() {
        let bad = crate::CycleSpec::columns(&[1, 2], &[3]);
        assert!(Cycle::try_from(&bad).is_err());
        let good = crate::CycleSpec::rows(&[0], &[3]);
        assert_eq!(Cycle::try_from(&good).unwrap().axis(), msd_core::Axis::Row);
    }
}

// ── Column (trapezoid) cycles ─────────────────────────────────────────────────

#[cfg(test)]
mod column {
    use super::*;

    #[test]
    fn leg_sequence() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::columns(&[1], &[3]).unwrap()).unwrap();
        assert_eq!(
            kinds(&plan),
            vec![
                LegKind::DetourOut,
                LegKind::Transit,
                LegKind::DetourIn,
                LegKind::Dwell,
                LegKind::DetourOut,
                LegKind::Return,
                LegKind::DetourIn,
            ]
        );
        assert!(plan.legs[3].moves.is_empty());
        assert!(close(plan.offset, 0.3 * SPACING));
        // 4 detours, 2 transits, 1 dwell.
        assert!(close(plan.duration(), 4.0 * 0.05 + 2.0 * 0.2 + 0.1));
    }

    #[test]
    fn detour_is_shared_and_downward() {
        let lat = demo_lattice();
        let plan = planner()
            .plan(&lat, &Cycle::columns(&[1, 10], &[3, 7]).unwrap())
            .unwrap();
        for m in &plan.legs[0].moves {
            assert_eq!(m.dx, 0.0);
            assert!(close(m.dy, -0.3 * SPACING));
        }
        for m in &plan.legs[2].moves {
            assert!(close(m.dy, 0.3 * SPACING));
        }
    }

    #[test]
    fn positional_pairing_not_nearest() {
        // Column 10 → 7 even though 12 and 13 are listed too; pairing never
        // re-sorts by value.
        let lat = demo_lattice();
        let plan = planner()
            .plan(&lat, &Cycle::columns(&[1, 10, 12, 13], &[3, 7, 14, 16]).unwrap())
            .unwrap();
        let offset = plan.offset;
        let transit = &plan.legs[1];

        let q1  = lat.qubit_at(0, 1).unwrap();
        let q10 = lat.qubit_at(0, 10).unwrap();
        assert!(close(transit.displacement_of(q1).x, 2.0 * SPACING - offset));
        assert!(close(transit.displacement_of(q10).x, -3.0 * SPACING - offset));
    }

    #[test]
    fn residual_offset_skews_transit() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::columns(&[1], &[3]).unwrap()).unwrap();
        let q = lat.qubit_at(2, 1).unwrap();
        let start = lat.position_of(q).unwrap();

        let mid = after_legs(&lat, &plan, q, 2);
        assert!(close(mid.x, start.x + 2.0 * SPACING - plan.offset));
        assert!(close(mid.y, start.y - plan.offset));
    }

    #[test]
    fn no_skew_lands_on_target_column() {
        let lat = demo_lattice();
        let detour = DetourConfig { transit_skew: TransitSkew::None, ..DetourConfig::default() };
        let plan = CyclePlanner::new(detour, Timing::default())
            .plan(&lat, &Cycle::columns(&[1], &[3]).unwrap())
            .unwrap();
        let q = lat.qubit_at(2, 1).unwrap();

        let landed = after_legs(&lat, &plan, q, 3);
        assert!(close(landed.x, lat.axis_coordinate(msd_core::Axis::Column, 3)));
        assert!(close(landed.y, lat.position_of(q).unwrap().y));
    }

    #[test]
    fn round_trip_net_zero() {
        let lat = demo_lattice();
        let plan = planner()
            .plan(&lat, &Cycle::columns(&[0, 2, 4, 6, 8, 12], &[1, 3, 5, 7, 9, 15]).unwrap())
            .unwrap();
        assert_eq!(plan.active.len(), 6 * 5);
        for id in plan.active_ids() {
            assert!(plan.net_displacement(id).approx_eq(Vec2::ZERO, 1e-4));
        }
    }

    #[test]
    fn unmatched_items_never_move() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::columns(&[4, 8], &[7, 10]).unwrap()).unwrap();
        let active: Vec<QubitId> = plan.active_ids().collect();
        for (id, _) in lat.iter().filter(|(id, _)| !active.contains(id)) {
            for leg in &plan.legs {
                assert!(leg.moves.iter().all(|m| m.id != id));
                assert_eq!(leg.displacement_of(id), Vec2::ZERO);
            }
        }
    }
}

// ── Row (L-shape) cycles ──────────────────────────────────────────────────────

#[cfg(test)]
mod row {
    use super::*;

    #[test]
    fn leg_sequence() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::rows(&[2, 4], &[1, 3]).unwrap()).unwrap();
        assert_eq!(
            kinds(&plan),
            vec![
                LegKind::DetourOut,
                LegKind::Transit,
                LegKind::Dwell,
                LegKind::Return,
                LegKind::DetourIn,
            ]
        );
        assert_eq!(plan.active.len(), 2 * 17);
    }

    #[test]
    fn transit_moves_toward_target_row() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::rows(&[0], &[3]).unwrap()).unwrap();
        let q = lat.qubit_at(0, 5).unwrap();

        let out = plan.legs[0].displacement_of(q);
        assert!(close(out.x, 0.3 * SPACING));
        assert_eq!(out.y, 0.0);

        let there = after_legs(&lat, &plan, q, 2);
        assert!(close(there.y, lat.axis_coordinate(msd_core::Axis::Row, 3)));
    }

    #[test]
    fn degenerate_cycle_keeps_detours() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::rows(&[2, 4], &[2, 4]).unwrap()).unwrap();
        let transit = &plan.legs[1];
        assert_eq!(transit.kind, LegKind::Transit);
        assert!(transit.is_stationary());
        assert_eq!(transit.moves.len(), plan.active.len());

        let out  = &plan.legs[0];
        let back = &plan.legs[4];
        assert!(!out.is_stationary());
        for (a, b) in out.moves.iter().zip(&back.moves) {
            assert_eq!(a.id, b.id);
            assert!(a.dx > 0.0);
            assert_eq!(a.dx, -b.dx);
        }
    }

    #[test]
    fn round_trip_net_zero() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::rows(&[0, 1], &[3, 4]).unwrap()).unwrap();
        for id in plan.active_ids() {
            assert!(plan.net_displacement(id).approx_eq(Vec2::ZERO, 1e-4));
        }
    }
}

// ── Vacancies and matching ────────────────────────────────────────────────────

#[cfg(test)]
mod matching {
    use super::*;

    #[test]
    fn vacancy_drops_one_item() {
        let full = demo_lattice();
        let holey = LatticeBuilder::new(5, 17, SPACING).vacancy(2, 10).build().unwrap();
        let cycle = Cycle::columns(&[1, 10, 12, 13], &[3, 7, 14, 16]).unwrap();

        let a = planner().plan(&full, &cycle).unwrap();
        let b = planner().plan(&holey, &cycle).unwrap();
        assert_eq!(b.active.len(), a.active.len() - 1);
        assert!(b.legs.iter().all(|l| l.kind == LegKind::Dwell || l.moves.len() == b.active.len()));
    }

    #[test]
    fn fully_vacant_source_line_is_skipped() {
        let lat = LatticeBuilder::new(1, 4, 1.0).vacancy(0, 1).build().unwrap();
        let plan = planner().plan(&lat, &Cycle::columns(&[1, 2], &[0, 3]).unwrap()).unwrap();
        assert_eq!(plan.active.len(), 1);
        assert_eq!(plan.active[0].value, 2);
    }

    #[test]
    fn empty_cycle_plans_empty_legs() {
        let lat = demo_lattice();
        let plan = planner().plan(&lat, &Cycle::columns(&[], &[]).unwrap()).unwrap();
        assert!(plan.active.is_empty());
        assert!(plan.legs.iter().all(|l| l.moves.is_empty()));
    }

    #[test]
    fn ambiguous_tolerance_surfaces_as_plan_error() {
        let lat = LatticeBuilder::new(1, 3, 1.0).build().unwrap();
        let detour = DetourConfig { match_tolerance: 1.5, ..DetourConfig::default() };
        let result = CyclePlanner::new(detour, Timing::default())
            .plan(&lat, &Cycle::columns(&[0, 1], &[2, 0]).unwrap());
        assert!(matches!(result, Err(PlanError::Match(_))));
    }
}
