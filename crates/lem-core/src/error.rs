//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The error type for `lem-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `lem-core`.
pub type CoreResult<T> = Result<T, CoreError>;
