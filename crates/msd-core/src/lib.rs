//! `msd-core` — foundational types for the `rust_msd` choreography engine.
//!
//! This crate is a dependency of every other `msd-*` crate.  It has no
//! `msd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `QubitId`, `TweezerId`, `CycleId`                          |
//! | [`geo`]         | `Vec2` lattice-plane vector                                |
//! | [`axis`]        | `Axis` — column lines vs. row lines                        |
//! | [`config`]      | `LatticeConfig`, `DetourConfig`, `SceneConfig`, …          |
//! | [`time`]        | `Timing` (leg durations), `SceneClock`                     |
//! | [`rng`]         | `FillRng` for seeded random fill patterns                  |
//! | [`error`]       | `MsdError`, `MsdResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod axis;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use axis::Axis;
pub use config::{DetourConfig, FillPattern, LatticeConfig, Layout, SceneConfig, TransitSkew};
pub use error::{MsdError, MsdResult};
pub use geo::Vec2;
pub use ids::{CycleId, QubitId, TweezerId};
pub use rng::FillRng;
pub use time::{SceneClock, Timing};
