use lem_core::CoreError;
use lem_paths::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid solver configuration: {0}")]
    Config(#[from] CoreError),

    #[error("topology error: {0}")]
    Path(#[from] PathError),

    #[error("topology error: no usable path was selected")]
    NoPaths,
}

impl SimError {
    /// `true` when the colony is well formed but cannot be traversed.
    pub fn is_topology_error(&self) -> bool {
        matches!(self, SimError::Path(_) | SimError::NoPaths)
    }
}

pub type SimResult<T> = Result<T, SimError>;
