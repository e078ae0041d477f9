//! Static map content and the reference seed-map engine.
//!
//! This crate houses the built-in seed maps, a loader for seed map text files,
//! and [`SeedMapGame`], a small engine that implements the `game-core`
//! contract so the dungeon view can run end to end:
//! - Seed maps: `#` is a wall, anything else is floor
//! - Movement: one step per command, walls and map edges block
//! - Sight: tiles within a radius of the player are visible and remembered
//!
//! The presentation layer never depends on this crate directly; it only sees
//! the [`game_core::GameModule`] trait object.

pub mod engine;
pub mod seed;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use engine::{SeedMapGame, SeedMapModule};
pub use seed::{DEFAULT_SEED_MAP, seed_dimensions};

#[cfg(feature = "loaders")]
pub use loaders::SeedMapLoader;
