//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `MsdError` where a
//! configuration problem can surface from them.

use thiserror::Error;

/// The top-level error type for `msd-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MsdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `msd-core`.
pub type MsdResult<T> = Result<T, MsdError>;
