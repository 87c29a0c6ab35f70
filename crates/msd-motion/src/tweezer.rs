//! Transient transport agents.

use rustc_hash::FxHashMap;

use msd_core::{QubitId, TweezerId, Vec2};

use crate::{MotionError, MotionResult};

/// A tweezer holding one item for the duration of a cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tweezer {
    pub id:       TweezerId,
    pub holding:  QubitId,
    pub position: Vec2,
}

/// Active tweezers plus a `QubitId → tweezer` index.
///
/// Tweezer ids are never reused within one store, so a renderer can key
/// visuals on them across cycles.
#[derive(Debug, Default)]
pub struct TweezerStore {
    active:   Vec<Tweezer>,
    by_qubit: FxHashMap<QubitId, usize>,
    next_id:  u32,
}

impl TweezerStore {
    /// Create a tweezer at `position` that takes ownership of `qubit`.
    pub fn grab(&mut self, qubit: QubitId, position: Vec2) -> MotionResult<Tweezer> {
        if self.by_qubit.contains_key(&qubit) {
            return Err(MotionError::AlreadyHeld(qubit));
        }
        let tweezer = Tweezer { id: TweezerId(self.next_id), holding: qubit, position };
        self.next_id += 1;
        self.by_qubit.insert(qubit, self.active.len());
        self.active.push(tweezer);
        Ok(tweezer)
    }

    /// The tweezer currently holding `qubit`.
    #[inline]
    pub fn holder_of(&self, qubit: QubitId) -> Option<&Tweezer> {
        self.by_qubit.get(&qubit).map(|&i| &self.active[i])
    }

    /// Move the tweezer holding `qubit` to `position`.  Returns `false` if
    /// the item is not held.
    pub(crate) fn set_position(&mut self, qubit: QubitId, position: Vec2) -> bool {
        match self.by_qubit.get(&qubit) {
            Some(&i) => {
                self.active[i].position = position;
                true
            }
            None => false,
        }
    }

    /// Destroy every tweezer, returning them in pickup order.
    pub fn release_all(&mut self) -> Vec<Tweezer> {
        self.by_qubit.clear();
        std::mem::take(&mut self.active)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
