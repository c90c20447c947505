//! Path-subsystem error type.

use thiserror::Error;

/// Errors produced by `lem-paths`.
#[derive(Debug, Error)]
pub enum PathError {
    /// The colony is well formed but the end room is unreachable.
    #[error("no path from {start:?} to {end:?}")]
    NoRoute { start: String, end: String },
}

pub type PathResult<T> = Result<T, PathError>;
