//! Deterministic RNG for random lattice fill patterns.
//!
//! The same seed always produces the same occupancy, so a configured
//! lattice is reproducible across runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded site-fill RNG.
pub struct FillRng(SmallRng);

impl FillRng {
    pub fn new(seed: u64) -> Self {
        FillRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
