#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use moves::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod moves;
mod types;

/// Overall condition of a board, derived from the grid rather than stored.
///
/// The core never enforces a terminal state; callers decide when to stop
/// offering moves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal jump remains.
    InProgress,
    /// A single marble remains and it sits in the center hole.
    Won,
    /// No legal jump remains and the board is not won.
    Stuck,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Stuck)
    }
}
