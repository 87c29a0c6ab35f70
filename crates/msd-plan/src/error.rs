//! Planner error types.

use thiserror::Error;

use msd_lattice::MatchError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("source list has {source_len} values but target list has {target_len}")]
    LengthMismatch { source_len: usize, target_len: usize },

    #[error("axis value {0} appears more than once in the source list")]
    DuplicateSource(u32),

    #[error("axis value {0} appears more than once in the target list")]
    DuplicateTarget(u32),

    #[error("could not resolve the source group: {0}")]
    Match(#[from] MatchError),
}

pub type PlanResult<T> = Result<T, PlanError>;
