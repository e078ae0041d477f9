//! Immutable map snapshots.
use crate::{EngineError, Tile, Vector};

/// Flat, row-major snapshot of every tile on the map.
///
/// `tiles.len() == size.x * size.y` and the tile at `(col, row)` lives at
/// `size.x * row + col`. A snapshot is owned by whoever fetched it and is
/// never updated in place; ask the engine for a fresh one instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMap")
)]
pub struct Map {
    size: Vector,
    tiles: Vec<Tile>,
}

/// Unchecked wire form; decoding goes through [`Map::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMap {
    size: Vector,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMap> for Map {
    type Error = EngineError;

    fn try_from(raw: RawMap) -> Result<Self, Self::Error> {
        Map::new(raw.size, raw.tiles)
    }
}

impl Map {
    /// Wraps `tiles` as a snapshot of a `size.x` by `size.y` grid.
    pub fn new(size: Vector, tiles: Vec<Tile>) -> Result<Self, EngineError> {
        if size.x <= 0 || size.y <= 0 {
            return Err(EngineError::InvalidDimensions {
                width: size.x,
                height: size.y,
            });
        }

        let expected = (size.x as usize) * (size.y as usize);
        if tiles.len() != expected {
            return Err(EngineError::MapSizeMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self { size, tiles })
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.x && pos.y < self.size.y
    }

    /// Tile at a flat row-major index.
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile at a grid position, `None` outside the map.
    pub fn tile(&self, pos: Vector) -> Option<&Tile> {
        if self.in_bounds(pos) {
            self.tiles.get((self.size.x * pos.y + pos.x) as usize)
        } else {
            None
        }
    }
}

impl std::ops::Index<usize> for Map {
    type Output = Tile;

    fn index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}
