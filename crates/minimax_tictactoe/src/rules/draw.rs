//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Player, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = ".../.X./...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_one_gap_not_full() {
        let board: Board = "XOX/OX./OXO".parse().unwrap();
        assert!(!is_full(&board));
        assert!(is_full(&board.with(Position::MiddleRight, Player::X)));
    }

    #[test]
    fn test_draw_detection() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
