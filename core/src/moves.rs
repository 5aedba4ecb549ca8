use serde::{Deserialize, Serialize};

use crate::Vec2;

/// The four jump directions, in the fixed order move enumeration uses.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit displacement of this direction.
    pub const fn vector(self) -> Vec2 {
        match self {
            Self::Right => Vec2::new(1, 0),
            Self::Left => Vec2::new(-1, 0),
            Self::Down => Vec2::new(0, 1),
            Self::Up => Vec2::new(0, -1),
        }
    }
}

/// A directed jump: the marble at `source` leaps over `middle` and lands on
/// `target`, removing the marble it leaped over.
///
/// Every move satisfies `middle = source + direction` and
/// `target = source + 2 * direction`; the three positions are derived from a
/// single anchor and never change once the move is built.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    pub source: Vec2,
    pub middle: Vec2,
    pub target: Vec2,
}

impl Move {
    /// Builds the jump starting at `source`, deriving `middle` and `target`
    /// forward along `direction`.
    pub fn from_source(direction: Direction, source: Vec2) -> Self {
        let middle = source + direction.vector();
        let target = middle + direction.vector();
        Self {
            direction,
            source,
            middle,
            target,
        }
    }

    /// Builds the jump landing on `target`, deriving `middle` and `source`
    /// backward along `direction`.
    pub fn from_target(direction: Direction, target: Vec2) -> Self {
        let middle = target - direction.vector();
        let source = middle - direction.vector();
        Self {
            direction,
            source,
            middle,
            target,
        }
    }
}
