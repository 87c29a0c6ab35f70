//! Ordered cycle scripts.

use msd_plan::{Cycle, CycleSpec, PlanResult};

/// An ordered list of cycles to run back to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Script {
    pub cycles: Vec<CycleSpec>,
}

impl Script {
    pub fn new(cycles: Vec<CycleSpec>) -> Self {
        Self { cycles }
    }

    /// The MSD demonstration: five trapezoidal column cycles on a 5×17
    /// lattice, then three L-shaped row cycles.
    pub fn msd_demo() -> Self {
        let columns: [(&[u32], &[u32]); 5] = [
            (&[1, 10, 12, 13],     &[3, 7, 14, 16]),
            (&[4, 8, 11, 15],      &[7, 10, 14, 16]),
            (&[2, 8, 9, 10, 14],   &[4, 6, 7, 13, 16]),
            (&[0, 3, 5, 10, 11],   &[2, 6, 8, 12, 13]),
            (&[0, 2, 4, 6, 8, 12], &[1, 3, 5, 7, 9, 15]),
        ];
        let rows: [(&[u32], &[u32]); 3] = [
            (&[2, 4], &[1, 3]),
            (&[1, 3], &[0, 2]),
            (&[0, 1], &[3, 4]),
        ];

        let cycles = columns
            .iter()
            .map(|(s, t)| CycleSpec::columns(s, t))
            .chain(rows.iter().map(|(s, t)| CycleSpec::rows(s, t)))
            .collect();
        Self { cycles }
    }

    pub fn push(&mut self, spec: CycleSpec) {
        self.cycles.push(spec);
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Validate every entry, failing on the first malformed one.
    pub fn cycles(&self) -> PlanResult<Vec<Cycle>> {
        self.cycles.iter().map(Cycle::try_from).collect()
    }
}
