//! Legs — synchronized batches of per-item displacements.

use std::fmt;

use msd_core::{QubitId, Vec2};

/// The role a leg plays in a cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegKind {
    /// Perpendicular step off the home line onto the shared detour line.
    DetourOut,
    /// Primary-axis move toward the target line.
    Transit,
    /// Perpendicular step back by the detour offset.
    DetourIn,
    /// Visual hold; carries no displacement.
    Dwell,
    /// Primary-axis move back toward the source line.
    Return,
}

impl LegKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LegKind::DetourOut => "detour_out",
            LegKind::Transit   => "transit",
            LegKind::DetourIn  => "detour_in",
            LegKind::Dwell     => "dwell",
            LegKind::Return    => "return",
        }
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move item `id` by `(dx, dy)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub id: QubitId,
    pub dx: f32,
    pub dy: f32,
}

impl Displacement {
    #[inline]
    pub fn new(id: QubitId, delta: Vec2) -> Self {
        Self { id, dx: delta.x, dy: delta.y }
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// One synchronized batch.  Every displacement is relative to the positions
/// before the leg starts; `duration` only paces the renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub kind:     LegKind,
    /// Seconds.
    pub duration: f32,
    pub moves:    Vec<Displacement>,
}

impl Leg {
    pub fn new(kind: LegKind, duration: f32, moves: Vec<Displacement>) -> Self {
        Self { kind, duration, moves }
    }

    pub fn dwell(duration: f32) -> Self {
        Self::new(LegKind::Dwell, duration, Vec::new())
    }

    /// The displacement this leg applies to `id` (zero if `id` is not moved).
    pub fn displacement_of(&self, id: QubitId) -> Vec2 {
        self.moves
            .iter()
            .find(|m| m.id == id)
            .map_or(Vec2::ZERO, Displacement::delta)
    }

    /// `true` if no item actually moves during this leg.
    pub fn is_stationary(&self) -> bool {
        self.moves.iter().all(|m| m.delta().is_zero())
    }
}
