use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of the square grid holding the cross-shaped play area.
pub const BOARD_SIZE: Coord = 7;

/// The center hole: the one that starts empty and must hold the last marble.
pub const CENTER: Vec2 = Vec2::new(3, 3);

const fn in_bounds(coords: Vec2) -> bool {
    coords.x >= 0 && coords.x < BOARD_SIZE && coords.y >= 0 && coords.y < BOARD_SIZE
}

/// Whether `coords` belongs to the cross-shaped play area: the 7x7 square
/// minus its four 2x2 corner blocks, 33 holes in total.
const fn is_cross_hole(coords: Vec2) -> bool {
    in_bounds(coords) && !((coords.x < 2 || coords.x > 4) && (coords.y < 2 || coords.y > 4))
}

/// Grid with every hole of the cross set to `fill` and everything else
/// `Absent`.
fn cross_grid(fill: CellState) -> Array2<CellState> {
    let mut cells = Array2::default([BOARD_SIZE as usize; 2]);
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let coords = Vec2::new(x, y);
            if is_cross_hole(coords) {
                cells[coords.grid_index()] = fill;
            }
        }
    }
    cells
}

/// The playing board: a cross-shaped grid of holes plus the stack of jumps
/// applied so far.
///
/// The set of `Absent` cells is fixed at construction; gameplay only ever
/// toggles holes between `Empty` and `Occupied`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    start: Array2<CellState>,
    cells: Array2<CellState>,
    history: Vec<Move>,
}

impl Board {
    /// Standard opening layout: every hole occupied except the empty center.
    pub fn new() -> Self {
        let mut start = cross_grid(CellState::Occupied);
        start[CENTER.grid_index()] = CellState::Empty;
        Self {
            cells: start.clone(),
            start,
            history: Vec::new(),
        }
    }

    /// Board with marbles exactly at `marbles` and every other hole empty.
    ///
    /// Each coordinate must name a hole of the standard cross.
    pub fn with_marbles(marbles: &[Vec2]) -> Result<Self> {
        let mut start = cross_grid(CellState::Empty);
        for &coords in marbles {
            if !in_bounds(coords) {
                return Err(GameError::OutOfBounds);
            }
            if !is_cross_hole(coords) {
                return Err(GameError::NotAHole);
            }
            start[coords.grid_index()] = CellState::Occupied;
        }
        Ok(Self {
            cells: start.clone(),
            start,
            history: Vec::new(),
        })
    }

    pub fn size(&self) -> Coord {
        BOARD_SIZE
    }

    pub fn validate_coords(&self, coords: Vec2) -> Result<Vec2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// State of the cell at `coords`.
    pub fn cell_at(&self, coords: Vec2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.grid_index()])
    }

    fn get(&self, coords: Vec2) -> Option<CellState> {
        in_bounds(coords).then(|| self.cells[coords.grid_index()])
    }

    /// Legal jumps starting at `source`, in direction declaration order.
    ///
    /// Empty unless `source` currently holds a marble.
    pub fn moves_from(&self, source: Vec2) -> Result<Vec<Move>> {
        let source = self.validate_coords(source)?;
        Ok(self.moves_from_hole(source))
    }

    fn moves_from_hole(&self, source: Vec2) -> Vec<Move> {
        let mut moves = Vec::new();
        if !self.cells[source.grid_index()].has_marble() {
            return moves;
        }
        for direction in Direction::ALL {
            let m = Move::from_source(direction, source);
            if self.get(m.target) == Some(CellState::Empty)
                && self.get(m.middle) == Some(CellState::Occupied)
            {
                moves.push(m);
            }
        }
        moves
    }

    /// Legal jumps landing on `target`, in direction declaration order.
    ///
    /// Empty unless `target` is currently an empty hole.
    pub fn moves_to(&self, target: Vec2) -> Result<Vec<Move>> {
        let target = self.validate_coords(target)?;
        Ok(self.moves_to_hole(target))
    }

    fn moves_to_hole(&self, target: Vec2) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.cells[target.grid_index()] != CellState::Empty {
            return moves;
        }
        for direction in Direction::ALL {
            let m = Move::from_target(direction, target);
            if self.get(m.source) == Some(CellState::Occupied)
                && self.get(m.middle) == Some(CellState::Occupied)
            {
                moves.push(m);
            }
        }
        moves
    }

    /// Every legal jump on the current board, scanned row-major over the
    /// empty holes.
    pub fn all_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let coords = Vec2::new(x, y);
                if self.cells[coords.grid_index()] == CellState::Empty {
                    moves.extend(self.moves_to_hole(coords));
                }
            }
        }
        log::trace!("{} legal jumps on the board", moves.len());
        moves
    }

    /// Applies `m` without re-checking legality.
    ///
    /// Caller contract: `m` came from move enumeration on the board in its
    /// current state. Use [`Board::try_apply_move`] to validate instead.
    pub fn apply_move(&mut self, m: Move) {
        self.cells[m.source.grid_index()] = CellState::Empty;
        self.cells[m.middle.grid_index()] = CellState::Empty;
        self.cells[m.target.grid_index()] = CellState::Occupied;
        self.history.push(m);
        log::debug!("applied {:?} jump from {} to {}", m.direction, m.source, m.target);
    }

    /// Validates that `m` is a legal jump on the current board, then applies
    /// it.
    ///
    /// Fails with [`GameError::IllegalMove`] when the jump geometry or the
    /// three-cell pattern does not hold.
    pub fn try_apply_move(&mut self, m: Move) -> Result<()> {
        let source = self.validate_coords(m.source)?;
        self.validate_coords(m.target)?;

        let step = m.direction.vector();
        if m.middle != source + step || m.target != source + step * 2 {
            return Err(GameError::IllegalMove);
        }
        if self.cells[m.source.grid_index()] != CellState::Occupied
            || self.cells[m.middle.grid_index()] != CellState::Occupied
            || self.cells[m.target.grid_index()] != CellState::Empty
        {
            return Err(GameError::IllegalMove);
        }

        self.apply_move(m);
        Ok(())
    }

    /// Pops the most recent jump and inverts its effect exactly.
    ///
    /// Returns the reverted jump, or `None` when there is no history (a
    /// no-op, not an error).
    pub fn revert_last_move(&mut self) -> Option<Move> {
        let m = self.history.pop()?;
        self.cells[m.source.grid_index()] = CellState::Occupied;
        self.cells[m.middle.grid_index()] = CellState::Occupied;
        self.cells[m.target.grid_index()] = CellState::Empty;
        log::debug!("reverted {:?} jump from {} to {}", m.direction, m.source, m.target);
        Some(m)
    }

    /// Restores the opening layout and clears the history.
    pub fn reset(&mut self) {
        self.cells = self.start.clone();
        self.history.clear();
        log::debug!("board reset");
    }

    /// Number of marbles still on the board.
    pub fn marbles_left(&self) -> MarbleCount {
        self.cells
            .iter()
            .filter(|cell| cell.has_marble())
            .count()
            .try_into()
            .unwrap()
    }

    /// True iff exactly one marble remains and it sits in the center hole.
    pub fn is_won(&self) -> bool {
        self.marbles_left() == 1 && self.cells[CENTER.grid_index()].has_marble()
    }

    /// Derived game condition; a won board is never reported as stuck.
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.all_moves().is_empty() {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }

    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Jumps applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
