use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Coordinates do not name a hole")]
    NotAHole,
    #[error("Move is not a legal jump on the current board")]
    IllegalMove,
}

pub type Result<T> = core::result::Result<T, GameError>;
