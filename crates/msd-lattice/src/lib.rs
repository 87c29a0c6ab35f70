//! `msd-lattice` — the item lattice and axis-group matching.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`lattice`] | `Lattice` (SoA positions + R-tree), `LatticeEntry`          |
//! | [`builder`] | `LatticeBuilder` — grid layout, fill patterns, vacancies    |
//! | [`matcher`] | `GroupMatcher`, `GroupMatch`                                |
//! | [`error`]   | `LatticeError`, `MatchError`, `LatticeResult<T>`            |
//!
//! # Coordinates
//!
//! Site `(row, col)` of a `rows × cols` grid sits at
//!
//! ```text
//! x = (col - (cols - 1) / 2) * spacing
//! y = ((rows - 1) / 2 - row) * spacing
//! ```
//!
//! so the lattice is centred on the origin with row 0 at the top.

pub mod builder;
pub mod error;
pub mod lattice;
pub mod matcher;


pub use builder::LatticeBuilder;
pub use error::{LatticeError, LatticeResult, MatchError};
pub use lattice::{Lattice, LatticeEntry};
pub use matcher::{GroupMatch, GroupMatcher};
