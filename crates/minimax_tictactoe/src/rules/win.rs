//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};

/// Every winning line, in the order they are checked: rows, columns,
/// main diagonal, anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found, scanning [`LINES`]
/// in order, or `None`.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// Returns the player holding all three cells of `line`, if any.
pub fn line_owner(board: &Board, [a, b, c]: &[Position; 3]) -> Option<Player> {
    let first = board.get(*a);
    match first {
        Cell::Occupied(player) if board.get(*b) == first && board.get(*c) == first => Some(player),
        _ => None,
    }
}
