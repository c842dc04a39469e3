//! Balanced counts invariant: X and O marks differ by at most one.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: players alternate, so mark counts never drift apart.
pub struct BalancedCountsInvariant;

impl Invariant<Board> for BalancedCountsInvariant {
    fn holds(board: &Board) -> bool {
        board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}
