use msd_core::QubitId;
use msd_lattice::LatticeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("{0} is not on the lattice")]
    QubitNotFound(QubitId),

    #[error("{0} is already held by a tweezer")]
    AlreadyHeld(QubitId),

    #[error("{0} appears more than once in one leg")]
    DuplicateMove(QubitId),

    #[error("lattice commit failed: {0}")]
    Lattice(#[from] LatticeError),
}

pub type MotionResult<T> = Result<T, MotionError>;
