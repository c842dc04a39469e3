//! Single winner invariant: at most one player owns a complete line.

use super::super::rules::win::{LINES, line_owner};
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: the game stops as soon as a line completes, so both players
/// can never hold a line at the same time.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    /// Players owning at least one complete line.
    pub fn line_owners(board: &Board) -> Vec<Player> {
        let mut owners: Vec<Player> = LINES
            .iter()
            .filter_map(|line| line_owner(board, line))
            .collect();
        owners.sort_by_key(|p| *p == Player::O);
        owners.dedup();
        owners
    }
}

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        Self::line_owners(board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lines_holds() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
        assert!(SingleWinnerInvariant::line_owners(&board).is_empty());
    }

    #[test]
    fn test_double_line_for_one_player_holds() {
        // X completes a row and a column with one move.
        let board: Board = "XXX/XOO/XOO".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
        assert_eq!(SingleWinnerInvariant::line_owners(&board), vec![Player::X]);
    }

    #[test]
    fn test_both_players_with_lines_violates() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
