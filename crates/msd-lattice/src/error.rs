//! Lattice-subsystem error types.

use thiserror::Error;

use msd_core::{MsdError, QubitId};

/// Conflicts detected while resolving an axis group to items.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("{qubit} lies within tolerance of both axis values {first} and {second}")]
    AmbiguousValue {
        qubit:  QubitId,
        first:  u32,
        second: u32,
    },

    #[error("{a} and {b} occupy the same position within tolerance")]
    CoincidentQubits { a: QubitId, b: QubitId },
}

/// Errors produced by `msd-lattice`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LatticeError {
    #[error(transparent)]
    Config(#[from] MsdError),

    #[error("{0} not found in lattice")]
    QubitNotFound(QubitId),

    #[error("group match failed: {0}")]
    Match(#[from] MatchError),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
