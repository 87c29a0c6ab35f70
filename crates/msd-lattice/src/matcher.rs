//! Resolve a list of column or row indices to the items lying on them.

use log::debug;
use rustc_hash::FxHashMap;

use msd_core::{Axis, QubitId};

use crate::{Lattice, MatchError};

/// One item found on one of the requested lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMatch {
    pub id:    QubitId,
    /// The axis value (column or row index) the item matched.
    pub value: u32,
}

/// Matches items to axis values by coordinate, within a tolerance that
/// absorbs floating-point layout error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroupMatcher {
    pub tolerance: f32,
}

impl Default for GroupMatcher {
    fn default() -> Self {
        Self { tolerance: 1e-3 }
    }
}

impl GroupMatcher {
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Every item whose coordinate on `axis` matches one of `values`, in
    /// ascending id order.
    ///
    /// Values with no items (vacant or out-of-range lines) are skipped.  An
    /// item near two different listed values, or two matched items at the
    /// same spot, is reported as a [`MatchError`] instead of being resolved
    /// arbitrarily.
    pub fn match_group(
        &self,
        lattice: &Lattice,
        axis:    Axis,
        values:  &[u32],
    ) -> Result<Vec<GroupMatch>, MatchError> {
        let mut found: FxHashMap<QubitId, u32> = FxHashMap::default();

        for &value in values {
            let ids = lattice.ids_at_axis_value(axis, value, self.tolerance);
            if ids.is_empty() {
                debug!("no items on {axis} {value}; skipped");
                continue;
            }
            for id in ids {
                match found.insert(id, value) {
                    Some(first) if first != value => {
                        return Err(MatchError::AmbiguousValue { qubit: id, first, second: value });
                    }
                    _ => {}
                }
            }
        }

        let mut matches: Vec<GroupMatch> = found
            .into_iter()
            .map(|(id, value)| GroupMatch { id, value })
            .collect();
        matches.sort_unstable_by_key(|m| m.id);

        self.check_coincident(lattice, &matches)?;
        Ok(matches)
    }

    fn check_coincident(&self, lattice: &Lattice, matches: &[GroupMatch]) -> Result<(), MatchError> {
        let positions: Vec<_> = matches
            .iter()
            .filter_map(|m| lattice.position_of(m.id).map(|p| (m.id, p)))
            .collect();

        for (i, &(a, pa)) in positions.iter().enumerate() {
            if let Some(&(b, _)) = positions[i + 1..]
                .iter()
                .find(|(_, pb)| pa.approx_eq(*pb, self.tolerance))
            {
                return Err(MatchError::CoincidentQubits { a, b });
            }
        }
        Ok(())
    }
}
