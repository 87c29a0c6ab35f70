use msd_core::MsdError;
use msd_lattice::LatticeError;
use msd_motion::MotionError;
use msd_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("scene configuration error: {0}")]
    Config(#[from] MsdError),

    #[error("lattice is {got_rows}x{got_cols} but the configuration says {rows}x{cols}")]
    LatticeMismatch {
        rows:     u32,
        cols:     u32,
        got_rows: u32,
        got_cols: u32,
    },

    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("cycle rejected: {0}")]
    Plan(#[from] PlanError),

    #[error("move failed: {0}")]
    Motion(#[from] MotionError),
}

pub type SceneResult<T> = Result<T, SceneError>;
