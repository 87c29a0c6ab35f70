//! Lattice representation.
//!
//! # Data layout
//!
//! Per-item data is stored as parallel `Vec`s indexed by `QubitId`:
//!
//! ```text
//! home_site[q]  — (row, col) the item was created on, immutable
//! position[q]   — current (x, y), written only by the move executor
//! ```
//!
//! `occupant` is a row-major `rows * cols` table mapping each site to the
//! item created there, or `None` for a vacancy.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over current positions answers "which items lie on
//! this column/row line" as an envelope query on a thin strip.  The tree is
//! rebuilt after every committed batch so queries never see partially
//! applied legs.

use rstar::{AABB, RTree, RTreeObject};

use msd_core::{Axis, QubitId, Vec2};

use crate::{LatticeError, LatticeResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[x, y]` point with its `QubitId`.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeEntry {
    pub point: [f32; 2],
    pub id:    QubitId,
}

impl RTreeObject for LatticeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// Rectangular lattice of items with stable identities and mutable positions.
///
/// Do not construct directly; use [`LatticeBuilder`][crate::LatticeBuilder].
pub struct Lattice {
    rows:    u32,
    cols:    u32,
    spacing: f32,

    /// Home `(row, col)` of each item.  Indexed by `QubitId`.
    home_site: Vec<(u32, u32)>,

    /// Current position of each item.  Indexed by `QubitId`.
    position: Vec<Vec2>,

    /// Row-major site table.  Length = `rows * cols`.
    occupant: Vec<Option<QubitId>>,

    index: RTree<LatticeEntry>,
}

impl Lattice {
    /// Assemble a lattice from an occupancy table.  Items are numbered
    /// row-major over filled sites.
    pub(crate) fn from_occupancy(rows: u32, cols: u32, spacing: f32, filled: &[bool]) -> Self {
        debug_assert_eq!(filled.len(), rows as usize * cols as usize);

        let mut home_site = Vec::new();
        let mut position  = Vec::new();
        let mut occupant  = vec![None; filled.len()];

        for row in 0..rows {
            for col in 0..cols {
                let site = row as usize * cols as usize + col as usize;
                if !filled[site] {
                    continue;
                }
                let id = QubitId(home_site.len() as u32);
                occupant[site] = Some(id);
                home_site.push((row, col));
                position.push(site_position(rows, cols, spacing, row, col));
            }
        }

        let index = build_index(&position);
        Self { rows, cols, spacing, home_site, position, occupant, index }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Number of items (filled sites).
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Current position of `id`, or `None` if no such item exists.
    #[inline]
    pub fn position_of(&self, id: QubitId) -> Option<Vec2> {
        self.position.get(id.index()).copied()
    }

    /// The site `id` was created on.
    #[inline]
    pub fn home_site(&self, id: QubitId) -> Option<(u32, u32)> {
        self.home_site.get(id.index()).copied()
    }

    /// Where `id` sits when it is at rest on its home site.
    pub fn home_position(&self, id: QubitId) -> Option<Vec2> {
        self.home_site(id)
            .map(|(row, col)| site_position(self.rows, self.cols, self.spacing, row, col))
    }

    /// The item created on `(row, col)`, or `None` for vacancies and
    /// out-of-range sites.
    pub fn qubit_at(&self, row: u32, col: u32) -> Option<QubitId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.occupant[row as usize * self.cols as usize + col as usize]
    }

    /// All vacant `(row, col)` sites in row-major order.
    pub fn vacant_sites(&self) -> Vec<(u32, u32)> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.qubit_at(row, col).is_none())
            .collect()
    }

    /// Iterator over `(id, current position)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QubitId, Vec2)> + '_ {
        self.position
            .iter()
            .enumerate()
            .map(|(i, &p)| (QubitId(i as u32), p))
    }

    /// Scene coordinate of the line named by `value` on `axis`.
    ///
    /// Values outside the lattice still map to a coordinate; such lines
    /// simply hold no items.
    pub fn axis_coordinate(&self, axis: Axis, value: u32) -> f32 {
        match axis {
            Axis::Column => (value as f32 - origin(self.cols)) * self.spacing,
            Axis::Row    => (origin(self.rows) - value as f32) * self.spacing,
        }
    }

    /// Items whose current coordinate on `axis` is strictly within
    /// `tolerance` of line `value`, in ascending id order.
    pub fn ids_at_axis_value(&self, axis: Axis, value: u32, tolerance: f32) -> Vec<QubitId> {
        let target = self.axis_coordinate(axis, value);
        let strip = match axis {
            Axis::Column => AABB::from_corners(
                [target - tolerance, f32::MIN],
                [target + tolerance, f32::MAX],
            ),
            Axis::Row => AABB::from_corners(
                [f32::MIN, target - tolerance],
                [f32::MAX, target + tolerance],
            ),
        };

        let mut ids: Vec<QubitId> = self
            .index
            .locate_in_envelope_intersecting(&strip)
            .filter(|e| {
                let p = Vec2::new(e.point[0], e.point[1]);
                (axis.coordinate(p) - target).abs() < tolerance
            })
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Overwrite the positions of a batch of items in one step.
    ///
    /// Reserved for the move executor.  Every id is checked before anything
    /// is written, so a failing batch leaves the lattice untouched.
    pub fn commit_positions(&mut self, updates: &[(QubitId, Vec2)]) -> LatticeResult<()> {
        if let Some(&(id, _)) = updates.iter().find(|(id, _)| id.index() >= self.position.len()) {
            return Err(LatticeError::QubitNotFound(id));
        }
        for &(id, pos) in updates {
            self.position[id.index()] = pos;
        }
        if !updates.is_empty() {
            self.index = build_index(&self.position);
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Centre index of `n` sites (fractional for even `n`).
#[inline]
fn origin(n: u32) -> f32 {
    (n as f32 - 1.0) * 0.5
}

fn site_position(rows: u32, cols: u32, spacing: f32, row: u32, col: u32) -> Vec2 {
    Vec2::new(
        (col as f32 - origin(cols)) * spacing,
        (origin(rows) - row as f32) * spacing,
    )
}

fn build_index(position: &[Vec2]) -> RTree<LatticeEntry> {
    let entries = position
        .iter()
        .enumerate()
        .map(|(i, p)| LatticeEntry { point: [p.x, p.y], id: QubitId(i as u32) })
        .collect();
    RTree::bulk_load(entries)
}
