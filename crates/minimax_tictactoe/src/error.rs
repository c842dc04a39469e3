//! Errors surfaced to the caller of the game engine.

use super::Position;

/// Why a human move was rejected.
///
/// A rejected move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The engine is not waiting for the human.
    #[display("It's not the human's turn")]
    NotHumansTurn,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
