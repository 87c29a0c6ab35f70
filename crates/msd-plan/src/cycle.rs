//! `Cycle` — one validated rearrangement request.
//!
//! # Pairing
//!
//! `source[i]` is sent to `target[i]`.  Pairing is by list position, never by
//! value or proximity, so callers must supply both lists already paired.
//! Construction rejects lists of different length and repeated values on
//! either side, which would make the mapping ambiguous.

use rustc_hash::FxHashSet;

use msd_core::Axis;

use crate::{PlanError, PlanResult};

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// A bijective mapping from source lines to target lines on one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    axis:   Axis,
    source: Vec<u32>,
    target: Vec<u32>,
}

impl Cycle {
    pub fn new(axis: Axis, source: &[u32], target: &[u32]) -> PlanResult<Self> {
        if source.len() != target.len() {
            return Err(PlanError::LengthMismatch {
                source_len: source.len(),
                target_len: target.len(),
            });
        }
        if let Some(v) = first_duplicate(source) {
            return Err(PlanError::DuplicateSource(v));
        }
        if let Some(v) = first_duplicate(target) {
            return Err(PlanError::DuplicateTarget(v));
        }
        Ok(Self { axis, source: source.to_vec(), target: target.to_vec() })
    }

    /// Items on `source` columns move horizontally to `target` columns.
    pub fn columns(source: &[u32], target: &[u32]) -> PlanResult<Self> {
        Self::new(Axis::Column, source, target)
    }

    /// Items on `source` rows move vertically to `target` rows.
    pub fn rows(source: &[u32], target: &[u32]) -> PlanResult<Self> {
        Self::new(Axis::Row, source, target)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn source(&self) -> &[u32] {
        &self.source
    }

    pub fn target(&self) -> &[u32] {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// `(source, target)` pairs in list order.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.source.iter().copied().zip(self.target.iter().copied())
    }

    /// The line `source` is paired with, if it is part of this cycle.
    pub fn target_of(&self, source: u32) -> Option<u32> {
        self.pairs().find(|&(s, _)| s == source).map(|(_, t)| t)
    }
}

fn first_duplicate(values: &[u32]) -> Option<u32> {
    let mut seen = FxHashSet::default();
    values.iter().copied().find(|v| !seen.insert(*v))
}

// ── CycleSpec ─────────────────────────────────────────────────────────────────

/// Unvalidated cycle description, as written in a script file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CycleSpec {
    pub axis:   Axis,
    pub source: Vec<u32>,
    pub target: Vec<u32>,
}

impl CycleSpec {
    pub fn columns(source: &[u32], target: &[u32]) -> Self {
        Self { axis: Axis::Column, source: source.to_vec(), target: target.to_vec() }
    }

    pub fn rows(source: &[u32], target: &[u32]) -> Self {
        Self { axis: Axis::Row, source: source.to_vec(), target: target.to_vec() }
    }
}

impl TryFrom<&CycleSpec> for Cycle {
    type Error = PlanError;

    fn try_from(spec: &CycleSpec) -> PlanResult<Cycle> {
        Cycle::new(spec.axis, &spec.source, &spec.target)
    }
}
