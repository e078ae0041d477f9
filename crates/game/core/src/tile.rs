//! Per-cell map data reported by the engine.

/// Structural classification of a map cell.
///
/// Engines report tags as raw bytes; any tag this crate does not know is kept
/// as [`TileType::Unknown`] instead of being rejected, so newer engines keep
/// working with older presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileType {
    Wall,
    Floor,
    Unknown(u8),
}

impl TileType {
    pub const WALL_TAG: u8 = 2;
    pub const FLOOR_TAG: u8 = 3;

    /// Decodes an engine tag.
    pub const fn from_tag(tag: u8) -> Self {
        match tag {
            Self::WALL_TAG => TileType::Wall,
            Self::FLOOR_TAG => TileType::Floor,
            other => TileType::Unknown(other),
        }
    }

    pub const fn tag(self) -> u8 {
        match self {
            TileType::Wall => Self::WALL_TAG,
            TileType::Floor => Self::FLOOR_TAG,
            TileType::Unknown(tag) => tag,
        }
    }
}

/// One cell of the map with its visibility history.
///
/// Invariant: `visible` implies `seen`. Use [`Tile::set_visible`] to keep the
/// two flags consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub tile_type: TileType,
    pub blocked: bool,
    /// The cell has been observed at least once during the session.
    pub seen: bool,
    /// The cell is within current sensory range.
    pub visible: bool,
}

impl Tile {
    pub const fn wall() -> Self {
        Self {
            tile_type: TileType::Wall,
            blocked: true,
            seen: false,
            visible: false,
        }
    }

    pub const fn floor() -> Self {
        Self {
            tile_type: TileType::Floor,
            blocked: false,
            seen: false,
            visible: false,
        }
    }

    /// Updates current visibility; a visible tile is remembered as seen.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.seen = true;
        }
    }
}
