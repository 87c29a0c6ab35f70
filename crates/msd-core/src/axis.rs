//! Lattice axis selector shared by the matcher, planner, and output crates.

use std::str::FromStr;

use crate::{MsdError, Vec2};

/// Which family of lattice lines a group or cycle refers to.
///
/// A `Column` group names vertical lines (items share an `x` coordinate) and
/// its cycles transit horizontally.  A `Row` group names horizontal lines
/// (items share a `y` coordinate) and its cycles transit vertically.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    #[default]
    Column,
    Row,
}

impl Axis {
    /// The coordinate of `pos` that identifies its line on this axis.
    #[inline]
    pub fn coordinate(self, pos: Vec2) -> f32 {
        match self {
            Axis::Column => pos.x,
            Axis::Row    => pos.y,
        }
    }

    /// Lowercase label used in CSV columns and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row    => "row",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = MsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "column" | "col" | "columns" => Ok(Axis::Column),
            "row" | "rows"               => Ok(Axis::Row),
            other => Err(MsdError::Parse(format!("unknown axis {other:?}"))),
        }
    }
}
