//! Seed map text format.
//!
//! A seed map is plain text, one line per row. `#` marks a wall; every other
//! character is floor. Line breaks carry no meaning when laying out tiles: the
//! text is read row-major by the map width, exactly like a flat tile array.
use game_core::{Tile, Vector};

/// Built-in cavern layout (54 x 25).
pub const DEFAULT_SEED_MAP: &str = include_str!("../maps/caverns.txt");

const WALL: char = '#';

/// Width (longest line) and height (line count) of a seed map text.
pub fn seed_dimensions(seed: &str) -> Vector {
    let rows: Vec<&str> = seed.lines().filter(|line| !line.is_empty()).collect();
    let width = rows
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    Vector::new(width as i32, rows.len() as i32)
}

/// Lays out `size.x * size.y` tiles from `seed`.
///
/// Cells past the end of the seed are walls.
pub fn tiles_from_seed(size: Vector, seed: &str) -> Vec<Tile> {
    let len = (size.x.max(0) as usize) * (size.y.max(0) as usize);
    let mut cells = seed.chars().filter(|c| *c != '\n' && *c != '\r');

    (0..len)
        .map(|_| match cells.next() {
            Some(WALL) | None => Tile::wall(),
            Some(_) => Tile::floor(),
        })
        .collect()
}

/// Walls around the edge, floor everywhere else.
pub fn bordered_room(size: Vector) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity((size.x.max(0) * size.y.max(0)) as usize);

    for y in 0..size.y {
        for x in 0..size.x {
            if x == 0 || x == size.x - 1 || y == 0 || y == size.y - 1 {
                tiles.push(Tile::wall());
            } else {
                tiles.push(Tile::floor());
            }
        }
    }

    tiles
}
