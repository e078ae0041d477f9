//! Eight-way movement directions.
use crate::Vector;

/// Compass direction of a single movement step.
///
/// Rows grow downward, so `N` decreases `y`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

impl Direction {
    pub const fn delta(self) -> Vector {
        match self {
            Direction::N => Vector::new(0, -1),
            Direction::NE => Vector::new(1, -1),
            Direction::E => Vector::new(1, 0),
            Direction::SE => Vector::new(1, 1),
            Direction::S => Vector::new(0, 1),
            Direction::SW => Vector::new(-1, 1),
            Direction::W => Vector::new(-1, 0),
            Direction::NW => Vector::new(-1, -1),
        }
    }
}
