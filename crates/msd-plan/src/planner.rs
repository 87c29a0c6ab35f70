//! The detour cycle planner.

use log::debug;

use msd_core::{Axis, DetourConfig, QubitId, Timing, TransitSkew, Vec2};
use msd_lattice::{GroupMatch, GroupMatcher, Lattice};

use crate::{Cycle, Displacement, Leg, LegKind, PlanResult};

// ── CyclePlan ─────────────────────────────────────────────────────────────────

/// The full, ordered leg sequence for one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclePlan {
    pub cycle:  Cycle,
    /// Items taking part, ascending by id, with the source line each matched.
    pub active: Vec<GroupMatch>,
    /// Perpendicular detour distance shared by every active item.
    pub offset: f32,
    pub legs:   Vec<Leg>,
}

impl CyclePlan {
    pub fn active_ids(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.active.iter().map(|m| m.id)
    }

    /// Sum of every leg's displacement for `id`.
    pub fn net_displacement(&self, id: QubitId) -> Vec2 {
        self.legs
            .iter()
            .fold(Vec2::ZERO, |acc, leg| acc + leg.displacement_of(id))
    }

    /// Total duration of all legs, in seconds.
    pub fn duration(&self) -> f32 {
        self.legs.iter().map(|l| l.duration).sum()
    }
}

// ── CyclePlanner ──────────────────────────────────────────────────────────────

/// Turns a [`Cycle`] into legs for the items currently on its source lines.
///
/// Planning is pure: the lattice is only read.
#[derive(Clone, Debug, Default)]
pub struct CyclePlanner {
    detour:  DetourConfig,
    timing:  Timing,
    matcher: GroupMatcher,
}

impl CyclePlanner {
    pub fn new(detour: DetourConfig, timing: Timing) -> Self {
        Self {
            matcher: GroupMatcher::new(detour.match_tolerance),
            detour,
            timing,
        }
    }

    /// Resolve the cycle's source lines and emit its legs.
    ///
    /// Source lines without items contribute nothing.  Items off the source
    /// lines appear in no leg.
    pub fn plan(&self, lattice: &Lattice, cycle: &Cycle) -> PlanResult<CyclePlan> {
        let active = self
            .matcher
            .match_group(lattice, cycle.axis(), cycle.source())?;

        let spacing = lattice.spacing();
        let offset  = self.detour.offset_fraction * spacing;

        let legs = match cycle.axis() {
            Axis::Column => self.trapezoid_legs(cycle, &active, spacing, offset),
            Axis::Row    => self.l_shape_legs(cycle, &active, spacing, offset),
        };

        debug!(
            "planned {} cycle {:?} -> {:?}: {} items, {} legs",
            cycle.axis(),
            cycle.source(),
            cycle.target(),
            active.len(),
            legs.len(),
        );

        Ok(CyclePlan { cycle: cycle.clone(), active, offset, legs })
    }

    /// Column cycle: down, across, up, hold, then the same three legs back.
    fn trapezoid_legs(&self, cycle: &Cycle, active: &[GroupMatch], spacing: f32, offset: f32) -> Vec<Leg> {
        let t = &self.timing;
        let skew = match self.detour.transit_skew {
            TransitSkew::ResidualOffset => offset,
            TransitSkew::None           => 0.0,
        };

        let down = uniform(active, Vec2::new(0.0, -offset));
        let up   = uniform(active, Vec2::new(0.0, offset));
        let across = per_item(active, |m| {
            Vec2::new(span(cycle, m) * spacing - skew, 0.0)
        });
        let back = per_item(active, |m| {
            Vec2::new(-span(cycle, m) * spacing + skew, 0.0)
        });

        vec![
            Leg::new(LegKind::DetourOut, t.detour,  down.clone()),
            Leg::new(LegKind::Transit,   t.transit, across),
            Leg::new(LegKind::DetourIn,  t.detour,  up.clone()),
            Leg::dwell(t.dwell),
            Leg::new(LegKind::DetourOut, t.detour,  down),
            Leg::new(LegKind::Return,    t.transit, back),
            Leg::new(LegKind::DetourIn,  t.detour,  up),
        ]
    }

    /// Row cycle: right, vertical transit, hold, vertical return, left.
    fn l_shape_legs(&self, cycle: &Cycle, active: &[GroupMatch], spacing: f32, offset: f32) -> Vec<Leg> {
        let t = &self.timing;

        // Rows count downward while +y points up.
        let there = per_item(active, |m| Vec2::new(0.0, -span(cycle, m) * spacing));
        let back  = per_item(active, |m| Vec2::new(0.0, span(cycle, m) * spacing));

        vec![
            Leg::new(LegKind::DetourOut, t.detour,  uniform(active, Vec2::new(offset, 0.0))),
            Leg::new(LegKind::Transit,   t.transit, there),
            Leg::dwell(t.dwell),
            Leg::new(LegKind::Return,    t.transit, back),
            Leg::new(LegKind::DetourIn,  t.detour,  uniform(active, Vec2::new(-offset, 0.0))),
        ]
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `target - source` in lines for one matched item.
fn span(cycle: &Cycle, m: &GroupMatch) -> f32 {
    // Matches only ever come from the source list, so the lookup succeeds.
    let target = cycle.target_of(m.value).unwrap_or(m.value);
    target as f32 - m.value as f32
}

fn uniform(active: &[GroupMatch], delta: Vec2) -> Vec<Displacement> {
    active.iter().map(|m| Displacement::new(m.id, delta)).collect()
}

fn per_item(active: &[GroupMatch], f: impl Fn(&GroupMatch) -> Vec2) -> Vec<Displacement> {
    active.iter().map(|m| Displacement::new(m.id, f(m))).collect()
}
