use serde::{Deserialize, Serialize};

/// State of a single position on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    /// Not part of the cross-shaped play area.
    Absent,
    /// A hole with no marble in it.
    Empty,
    /// A hole holding a marble.
    Occupied,
}

impl CellState {
    /// Whether this position belongs to the play area at all.
    pub const fn is_hole(self) -> bool {
        matches!(self, Self::Empty | Self::Occupied)
    }

    pub const fn has_marble(self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Absent
    }
}
