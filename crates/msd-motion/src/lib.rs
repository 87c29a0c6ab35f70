//! `msd-motion` — applies planned legs to the lattice.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`tweezer`]  | `Tweezer`, `TweezerStore` — transient per-item transport agents |
//! | [`executor`] | `MoveExecutor` — synchronized batch application of a `Leg`    |
//! | [`error`]    | `MotionError`, `MotionResult<T>`                               |
//!
//! # Movement model (batch-synchronous)
//!
//! 1. Every displacement of a leg is resolved against the positions held
//!    *before* the leg, so the order of entries inside a leg never matters.
//! 2. All new positions are committed to the lattice in one
//!    [`commit_positions`][msd_lattice::Lattice::commit_positions] call.
//! 3. An item held by a tweezer is moved through it: the tweezer position
//!    advances and the item takes the tweezer's new position.
//!
//! Tweezers own an item only between [`MoveExecutor::pickup`] and
//! [`MoveExecutor::release_all`]; identity on the lattice never changes.

pub mod error;
pub mod executor;
pub mod tweezer;


pub use error::{MotionError, MotionResult};
pub use executor::MoveExecutor;
pub use tweezer::{Tweezer, TweezerStore};
