use thiserror::Error;

use crate::board::Board;

/// Why a ship could not be put on a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Invalid ship size: {0} (expected 1..=5)")]
    InvalidSize(usize),

    #[error("Ship of size {size} at ({x}, {y}) does not fit on the board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// `board` is the target with the ship drawn in anyway, `mask` the ship's surround mask.
    #[error("Ship touches an existing ship")]
    Collision { board: Board, mask: Board },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    #[error("Fleet is already complete")]
    Full,

    #[error("Wrong ship size: expected {expected}, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("Ship touches an existing ship")]
    Collision,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Expected 10 rows, found {0}")]
    RowCount(usize),

    #[error("Row {row} has {len} cells, expected 10")]
    RowLength { row: usize, len: usize },

    #[error("Invalid cell character {ch:?} at ({x}, {y})")]
    InvalidCell { ch: char, x: usize, y: usize },
}
