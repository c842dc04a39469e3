//! Contract-based validation for human moves.
//!
//! Preconditions decide whether a reported move is accepted. Postconditions
//! describe what every accepted turn must preserve; they are checked in
//! debug builds only.

use super::engine::{GameEngine, Phase};
use super::error::InvalidMove;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::{Board, Cell, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition yields.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not finished.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the game is over.
    pub fn check(engine: &GameEngine) -> Result<(), InvalidMove> {
        if engine.phase() == Phase::GameOver {
            Err(InvalidMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the human is the side to move.
pub struct HumansTurn;

impl HumansTurn {
    /// Rejects moves made out of turn.
    pub fn check(engine: &GameEngine) -> Result<(), InvalidMove> {
        if engine.to_move() != engine.human_symbol() {
            Err(InvalidMove::NotHumansTurn)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinate is on the board.
pub struct OnBoard;

impl OnBoard {
    /// Converts `(row, col)` to a position, or rejects it.
    pub fn check(row: usize, col: usize) -> Result<Position, InvalidMove> {
        Position::from_coords(row, col).ok_or(InvalidMove::OutOfRange { row, col })
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(board: &Board, pos: Position) -> Result<(), InvalidMove> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(InvalidMove::Occupied(pos))
        }
    }
}

/// Contract for a human move, given as `(row, col)`.
///
/// Preconditions, in order:
/// - Game is not over
/// - It is the human's turn
/// - Coordinate is on the board
/// - Cell is empty
///
/// Postconditions:
/// - No mark was removed or changed
/// - Board invariants hold
pub struct HumanMoveContract;

impl Contract<GameEngine, (usize, usize)> for HumanMoveContract {
    type Checked = Position;

    #[instrument(skip(engine))]
    fn pre(engine: &GameEngine, action: &(usize, usize)) -> Result<Position, InvalidMove> {
        let (row, col) = *action;
        GameNotOver::check(engine)?;
        HumansTurn::check(engine)?;
        let pos = OnBoard::check(row, col)?;
        CellIsEmpty::check(&engine.board_snapshot(), pos)?;
        Ok(pos)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let before = before.board_snapshot();
        let after = after.board_snapshot();
        let mut violations = Vec::new();

        if !is_monotonic(&before, &after) {
            violations.push(InvariantViolation::new("Marks are never removed or changed"));
        }
        if let Err(mut board_violations) = BoardInvariants::check_all(&after) {
            violations.append(&mut board_violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Postcondition failed");
            Err(violations)
        }
    }
}

/// Every mark on `before` is still on `after`.
fn is_monotonic(before: &Board, after: &Board) -> bool {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .all(|(b, a)| *b == Cell::Empty || b == a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirstPlayer, Player, Settings};

    #[test]
    fn test_precondition_accepts_empty_cell() {
        let engine = GameEngine::new();
        assert_eq!(
            HumanMoveContract::pre(&engine, &(1, 1)),
            Ok(Position::Center)
        );
    }

    #[test]
    fn test_precondition_rejects_off_board() {
        let engine = GameEngine::new();
        assert_eq!(
            HumanMoveContract::pre(&engine, &(0, 3)),
            Err(InvalidMove::OutOfRange { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_precondition_rejects_occupied_cell() {
        // Computer opens at the top-left corner.
        let engine = GameEngine::with_settings(Settings {
            first_player: FirstPlayer::Computer,
        });
        assert_eq!(engine.human_symbol(), Player::O);
        assert_eq!(
            HumanMoveContract::pre(&engine, &(0, 0)),
            Err(InvalidMove::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_monotonic_detects_overwrite() {
        let before: Board = "X../.../...".parse().unwrap();
        let after: Board = "O../.../...".parse().unwrap();
        assert!(!is_monotonic(&before, &after));
        assert!(is_monotonic(&before, &before.with(Position::Center, Player::O)));
    }

    #[test]
    fn test_postcondition_holds_after_turn() {
        let before = GameEngine::new();
        let mut after = before.clone();
        after.apply_human_move(1, 1).unwrap();
        assert!(HumanMoveContract::post(&before, &after).is_ok());
    }
}
