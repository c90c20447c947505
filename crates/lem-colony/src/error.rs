//! Colony construction and parsing errors.

use thiserror::Error;

/// Errors produced while building or parsing a colony.
///
/// Every variant except [`Io`](ColonyError::Io) is a *format error*: the input
/// violates the map grammar.  Format errors are deterministic and never
/// retried.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("invalid data format: line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("invalid data format: room {0:?} is declared twice")]
    DuplicateRoom(String),

    #[error("invalid data format: room {0:?} is both start and end")]
    StartIsEnd(String),

    #[error("invalid data format: more than one start room")]
    DuplicateStart,

    #[error("invalid data format: more than one end room")]
    DuplicateEnd,

    #[error("invalid data format: no start room")]
    MissingStart,

    #[error("invalid data format: no end room")]
    MissingEnd,

    #[error("invalid data format: too many rooms to index")]
    TooManyRooms,

    #[error("invalid data format: ant count must be a positive integer")]
    NoAnts,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColonyError {
    /// `true` for grammar violations, `false` for storage failures.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ColonyError::Io(_))
    }

    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        ColonyError::Format { line, reason: reason.into() }
    }
}

pub type ColonyResult<T> = Result<T, ColonyError>;
