//! Engine errors surfaced through the game contract.

/// Errors an engine reports to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Width or height is not positive.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Tile count does not match `width * height`.
    #[error("map holds {actual} tiles, expected {expected}")]
    MapSizeMismatch { expected: usize, actual: usize },

    /// No tile on the map can host the player.
    #[error("map has no passable tile for the player")]
    NoPassableTile,
}
