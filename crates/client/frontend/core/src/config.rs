//! Frontend configuration structures and loaders.
//!
//! This module contains settings shared across frontend implementations
//! (terminal today, graphical later).

use std::{env, path::PathBuf};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub map: MapConfig,
    pub engine: EngineConfig,
    pub render: RenderConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_MAP_WIDTH` - Map width in tiles (default: 54)
    /// - `DUNGEON_MAP_HEIGHT` - Map height in tiles (default: 25)
    /// - `DUNGEON_SEED_MAP` - Path to a seed map text file (default: built-in)
    /// - `DUNGEON_SIGHT_RADIUS` - Engine sight radius, negative for unlimited (default: 8)
    /// - `DUNGEON_FONT_FAMILY` - Font family for tile glyphs (default: Cutive Mono)
    /// - `DUNGEON_MAX_TILE_SIZE` - Largest tile size in pixels (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<i32>("DUNGEON_MAP_WIDTH") {
            config.map.width = width.max(1);
        }
        if let Some(height) = read_env::<i32>("DUNGEON_MAP_HEIGHT") {
            config.map.height = height.max(1);
        }
        config.map.seed_map_path = env::var("DUNGEON_SEED_MAP").ok().map(PathBuf::from);

        if let Some(radius) = read_env::<i32>("DUNGEON_SIGHT_RADIUS") {
            config.engine.sight_radius = radius;
        }

        if let Ok(family) = env::var("DUNGEON_FONT_FAMILY") {
            if !family.trim().is_empty() {
                config.render.font_family = family;
            }
        }
        if let Some(size) = read_env::<u32>("DUNGEON_MAX_TILE_SIZE") {
            config.render.max_tile_size = size.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    /// Seed map file; `None` uses the built-in layout.
    pub seed_map_path: Option<PathBuf>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 54,
            height: 25,
            seed_map_path: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Negative means the whole map is always visible.
    pub sight_radius: i32,
}

impl EngineConfig {
    pub fn sight_radius(&self) -> Option<i32> {
        (self.sight_radius >= 0).then_some(self.sight_radius)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { sight_radius: 8 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub font_family: String,
    pub max_tile_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "Cutive Mono".to_string(),
            max_tile_size: 64,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
