//! Scene time model.
//!
//! # Design
//!
//! The core never sleeps or paces itself.  Every leg, pickup, release, and
//! pause carries a duration in seconds which the rendering collaborator uses
//! for interpolation.  `SceneClock` sums those durations so observers can
//! place each event on a shared timeline:
//!
//!   start_of_event = sum(durations of all earlier events)
//!
//! Durations never affect positions.

use std::fmt;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Per-step durations, in seconds.
///
/// Defaults reproduce the pacing of the MSD demonstration scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// Pause after the lattice is first shown.
    pub settle: f32,
    /// Tweezer pickup animation (only when tweezers are enabled).
    pub pickup: f32,
    /// Each perpendicular detour leg.
    pub detour: f32,
    /// Each primary-axis transit leg.
    pub transit: f32,
    /// Hold between the forward and the mirrored legs.
    pub dwell: f32,
    /// Tweezer release animation.
    pub release: f32,
    /// Pause between consecutive cycles of a script.
    pub cycle_pause: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle:      0.1,
            pickup:      0.1,
            detour:      0.05,
            transit:     0.2,
            dwell:       0.1,
            release:     0.1,
            cycle_pause: 0.2,
        }
    }
}

impl Timing {
    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> crate::MsdResult<()> {
        let fields = [
            ("settle", self.settle),
            ("pickup", self.pickup),
            ("detour", self.detour),
            ("transit", self.transit),
            ("dwell", self.dwell),
            ("release", self.release),
            ("cycle_pause", self.cycle_pause),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::MsdError::Config(format!(
                    "timing.{name} must be a finite non-negative number of seconds, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ── SceneClock ────────────────────────────────────────────────────────────────

/// Accumulated scene time in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneClock {
    elapsed: f32,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the scene started.
    #[inline]
    pub fn now(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `secs` and return the time at which that span started.
    #[inline]
    pub fn advance(&mut self, secs: f32) -> f32 {
        let start = self.elapsed;
        self.elapsed += secs;
        start
    }
}

impl fmt::Display for SceneClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.elapsed)
    }
}
