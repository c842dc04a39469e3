//! Turn orchestration between the human and the computer.

use super::contracts::{Contract, HumanMoveContract};
use super::error::InvalidMove;
use super::invariants::{BoardInvariants, InvariantSet};
use super::rules::classify;
use super::search::search;
use super::settings::{FirstPlayer, Settings};
use super::{Board, Cell, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Where the engine is in a game.
///
/// Derived from the board and the side to move; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for [`GameEngine::apply_human_move`].
    AwaitingHumanMove,
    /// The computer is about to search. Never observed between public calls.
    AwaitingComputerMove,
    /// A line was completed or the board filled up.
    GameOver,
}

/// Owns the authoritative board and plays the computer's side.
///
/// Callers interact only through coordinates and returned values; the board
/// is handed out as a copy.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    first_player: FirstPlayer,
    to_move: Player,
    last_computer_move: Option<Position>,
}

impl GameEngine {
    /// Creates an engine and starts the first game with the human moving first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates an engine and starts the first game with the given settings.
    ///
    /// If the computer moves first, its opening move is already on the board
    /// when this returns.
    #[instrument]
    pub fn with_settings(settings: Settings) -> Self {
        let mut engine = Self {
            board: Board::new(),
            first_player: settings.first_player,
            to_move: Player::X,
            last_computer_move: None,
        };
        engine.start_game();
        engine
    }

    /// Clears the board and starts the next game with the other side opening.
    #[instrument(skip(self), fields(previous = ?self.first_player))]
    pub fn new_game(&mut self) {
        self.first_player = self.first_player.toggle();
        self.start_game();
    }

    /// Applies the human's move at `(row, col)` and, if the game continues,
    /// the computer's reply.
    ///
    /// Returns the outcome after both half-moves.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, it is not the human's
    /// turn, the coordinate is off the board, or the cell is occupied. The
    /// board is left unchanged.
    #[instrument(skip(self), fields(human = %self.human_symbol()))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Outcome, InvalidMove> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let pos = HumanMoveContract::pre(self, &(row, col)).inspect_err(|e| {
            warn!(error = %e, "Rejected human move");
        })?;

        self.place(pos, self.human_symbol());
        debug!(%pos, "Human move applied");

        if self.phase() == Phase::AwaitingComputerMove {
            self.play_computer_move();
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = HumanMoveContract::post(&before, self) {
            panic!("Postcondition failed: {:?}", violations);
        }

        let outcome = self.current_outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        }
        Ok(outcome)
    }

    /// Returns a copy of the current board.
    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    /// Classifies the current board.
    pub fn current_outcome(&self) -> Outcome {
        classify(&self.board)
    }

    /// Returns where the engine is in the current game.
    pub fn phase(&self) -> Phase {
        if self.current_outcome().is_terminal() {
            Phase::GameOver
        } else if self.to_move == self.human_symbol() {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingComputerMove
        }
    }

    /// Symbol to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Side that opened the current game.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Symbol the human plays in the current game.
    pub fn human_symbol(&self) -> Player {
        self.first_player.human_symbol()
    }

    /// Symbol the computer plays in the current game.
    pub fn computer_symbol(&self) -> Player {
        self.human_symbol().opponent()
    }

    /// The computer's most recent move in the current game.
    pub fn last_computer_move(&self) -> Option<Position> {
        self.last_computer_move
    }

    fn start_game(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.last_computer_move = None;
        info!(
            first = self.first_player.label(),
            human = %self.human_symbol(),
            "New game"
        );

        if self.phase() == Phase::AwaitingComputerMove {
            self.play_computer_move();
        }
    }

    fn play_computer_move(&mut self) {
        debug_assert_eq!(self.phase(), Phase::AwaitingComputerMove);

        let symbol = self.computer_symbol();
        let report = search(&self.board, symbol);
        self.place(report.position, symbol);
        self.last_computer_move = Some(report.position);

        info!(
            position = %report.position,
            score = report.score,
            nodes = report.nodes,
            "Computer moved"
        );
    }

    fn place(&mut self, pos: Position, player: Player) {
        debug_assert_eq!(player, self.to_move);
        debug_assert!(self.board.is_empty(pos));

        self.board.set(pos, Cell::Occupied(player));
        self.to_move = player.opponent();

        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "Board invariants violated:\n{}",
            self.board
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_waits_for_human() {
        let engine = GameEngine::new();
        assert_eq!(engine.phase(), Phase::AwaitingHumanMove);
        assert_eq!(engine.human_symbol(), Player::X);
        assert_eq!(engine.board_snapshot(), Board::new());
        assert_eq!(engine.current_outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_computer_first_opens_top_left() {
        let engine = GameEngine::with_settings(Settings {
            first_player: FirstPlayer::Computer,
        });
        assert_eq!(engine.computer_symbol(), Player::X);
        assert_eq!(engine.last_computer_move(), Some(Position::TopLeft));
        assert_eq!(
            engine.board_snapshot().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_human_move(1, 1).unwrap();
        assert_eq!(outcome, Outcome::InProgress);

        let board = engine.board_snapshot();
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(engine.last_computer_move(), Some(Position::TopLeft));
        assert_eq!(engine.to_move(), Player::X);
    }

    #[test]
    fn test_rejected_move_leaves_board() {
        let mut engine = GameEngine::new();
        engine.apply_human_move(1, 1).unwrap();
        let before = engine.board_snapshot();

        assert_eq!(
            engine.apply_human_move(1, 1),
            Err(InvalidMove::Occupied(Position::Center))
        );
        assert_eq!(
            engine.apply_human_move(5, 0),
            Err(InvalidMove::OutOfRange { row: 5, col: 0 })
        );
        assert_eq!(engine.board_snapshot(), before);
        assert_eq!(engine.phase(), Phase::AwaitingHumanMove);
    }

    /// Engine frozen with the computer (X) to move, a state no public call returns in.
    fn computer_to_move(board: Board) -> GameEngine {
        GameEngine {
            board,
            first_player: FirstPlayer::Computer,
            to_move: Player::X,
            last_computer_move: None,
        }
    }

    #[test]
    fn test_move_out_of_turn_rejected() {
        let mut engine = computer_to_move(Board::new());
        assert_eq!(engine.phase(), Phase::AwaitingComputerMove);
        assert_eq!(
            HumanMoveContract::pre(&engine, &(1, 1)),
            Err(InvalidMove::NotHumansTurn)
        );
        assert_eq!(engine.apply_human_move(1, 1), Err(InvalidMove::NotHumansTurn));
        assert_eq!(engine.board_snapshot(), Board::new());
    }

    #[test]
    fn test_game_over_checked_before_turn() {
        let engine = computer_to_move("OOO/XX./X..".parse().unwrap());
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(
            HumanMoveContract::pre(&engine, &(2, 2)),
            Err(InvalidMove::GameOver)
        );
    }

    #[test]
    fn test_new_game_alternates_and_resets() {
        let mut engine = GameEngine::new();
        engine.apply_human_move(0, 0).unwrap();

        engine.new_game();
        assert_eq!(engine.first_player(), FirstPlayer::Computer);
        assert_eq!(engine.board_snapshot().count(Player::X), 1);
        assert_eq!(engine.board_snapshot().count(Player::O), 0);

        engine.new_game();
        assert_eq!(engine.first_player(), FirstPlayer::Human);
        assert_eq!(engine.board_snapshot(), Board::new());
        assert_eq!(engine.last_computer_move(), None);
    }
}
