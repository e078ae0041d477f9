//! Presentation-layer errors.
use game_core::{EngineError, Vector};

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The snapshot does not cover the grid the engine reports.
    #[error("map snapshot is {actual}, engine reports size {expected}")]
    SnapshotMismatch { expected: Vector, actual: Vector },
}
