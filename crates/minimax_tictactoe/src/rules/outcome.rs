//! Terminal-state classification.

use super::super::{Board, Outcome};
use super::{check_winner, is_full};

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are checked before fullness, so a board that is full *and* has a
/// line is a win.
pub fn classify(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(classify(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_reports_symbol() {
        let board: Board = "X.O/XO./O.X".parse().unwrap();
        assert_eq!(classify(&board), Outcome::Win(Player::O));
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert_eq!(classify(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(classify(&board), Outcome::Draw);
    }

    #[test]
    fn test_classify_is_pure() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let before = board;
        assert_eq!(classify(&board), classify(&board));
        assert_eq!(board, before);
    }
}
