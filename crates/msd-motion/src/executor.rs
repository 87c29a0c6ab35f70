//! Synchronized application of legs to the lattice.

use log::trace;
use rustc_hash::FxHashSet;

use msd_core::{QubitId, Vec2};
use msd_lattice::Lattice;
use msd_plan::Leg;

use crate::{MotionError, MotionResult, Tweezer, TweezerStore};

/// The only writer of lattice positions.
///
/// Owns the tweezer store so held items are always moved through their
/// tweezer.
#[derive(Debug, Default)]
pub struct MoveExecutor {
    pub tweezers: TweezerStore,
}

impl MoveExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand each of `ids` to a new tweezer placed on the item.
    ///
    /// All ids are checked before any tweezer is created.
    pub fn pickup(&mut self, lattice: &Lattice, ids: &[QubitId]) -> MotionResult<Vec<Tweezer>> {
        let mut seen = FxHashSet::default();
        let mut grips = Vec::with_capacity(ids.len());
        for &id in ids {
            let pos = lattice.position_of(id).ok_or(MotionError::QubitNotFound(id))?;
            if !seen.insert(id) || self.tweezers.holder_of(id).is_some() {
                return Err(MotionError::AlreadyHeld(id));
            }
            grips.push((id, pos));
        }

        grips
            .into_iter()
            .map(|(id, pos)| self.tweezers.grab(id, pos))
            .collect()
    }

    /// Destroy every tweezer.  Items stay where their tweezer left them.
    pub fn release_all(&mut self) -> Vec<Tweezer> {
        self.tweezers.release_all()
    }

    /// Apply one leg as a single batch.
    ///
    /// New positions are computed from the pre-leg state and committed
    /// together; on error nothing is written.
    pub fn apply_leg(&mut self, lattice: &mut Lattice, leg: &Leg) -> MotionResult<()> {
        let mut seen    = FxHashSet::default();
        let mut updates: Vec<(QubitId, Vec2)> = Vec::with_capacity(leg.moves.len());

        for m in &leg.moves {
            if !seen.insert(m.id) {
                return Err(MotionError::DuplicateMove(m.id));
            }
            let base = match self.tweezers.holder_of(m.id) {
                Some(tweezer) => tweezer.position,
                None => lattice.position_of(m.id).ok_or(MotionError::QubitNotFound(m.id))?,
            };
            updates.push((m.id, base + m.delta()));
        }

        lattice.commit_positions(&updates)?;
        for &(id, pos) in &updates {
            self.tweezers.set_position(id, pos);
        }

        trace!("applied {} leg: {} moves", leg.kind, updates.len());
        Ok(())
    }
}
