use core::fmt;
use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board positions and jump vectors.
///
/// Signed: deriving a jump steps outside the board before any bounds check
/// runs.
pub type Coord = i16;

/// Count type used for marble counts and total-hole counts.
pub type MarbleCount = u16;

/// Two-dimensional board position or displacement `(x, y)`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: Coord,
    pub y: Coord,
}

impl Vec2 {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Coord> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Coord) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Conversion into an `ndarray` index, valid only for in-bounds positions.
pub trait AsGridIndex {
    fn grid_index(self) -> [usize; 2];
}

impl AsGridIndex for Vec2 {
    fn grid_index(self) -> [usize; 2] {
        [self.x as usize, self.y as usize]
    }
}
