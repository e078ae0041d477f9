//! Integer grid vector used for sizes and positions.
use std::{fmt, ops};

/// Discrete `(x, y)` pair expressed in tile coordinates.
///
/// Used both for map dimensions (`x` = width, `y` = height) and for tile or
/// player positions (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn square_distance(&self, other: &Vector) -> i32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns true if `other` lies strictly inside a circle of `range_limit`.
    pub fn in_range(&self, other: &Vector, range_limit: i32) -> bool {
        self.square_distance(other) < range_limit * range_limit
    }
}

impl ops::Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
