//! Engine contract shared by the dungeon view and any game engine behind it.
//!
//! `game-core` defines the narrow interface the presentation layer consumes:
//! value types ([`Vector`], [`Tile`], [`Map`], [`Direction`]) and the engine
//! traits ([`Game`], [`GameModule`]). Engines own all persistent state; the
//! presentation layer only ever sees immutable [`Map`] snapshots.
pub mod direction;
pub mod error;
pub mod game;
pub mod map;
pub mod tile;
pub mod vector;

pub use direction::Direction;
pub use error::EngineError;
pub use game::{Game, GameModule};
pub use map::Map;
pub use tile::{Tile, TileType};
pub use vector::Vector;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
