//! Application state and key handling.

use crossterm::event::KeyCode;
use minimax_tictactoe::{Board, GameEngine, Outcome, Phase, Position, Settings};
use tracing::{debug, info};

use crate::input::{Intent, intent};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and wait for the next key.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Results of finished games in this session, from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the human won.
    pub wins: u32,
    /// Games the computer won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    tally: Tally,
}

impl App {
    /// Creates the app and starts the first game.
    pub fn new(settings: Settings) -> Self {
        let mut app = Self {
            engine: GameEngine::with_settings(settings),
            cursor: Position::Center,
            status_message: String::new(),
            tally: Tally::default(),
        };
        app.status_message = app.opening_message();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Copy of the board to draw.
    pub fn board(&self) -> Board {
        self.engine.board_snapshot()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Session results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        let intent = intent(self.cursor, key);
        debug!(?key, ?intent, "Handling key");

        match intent {
            Intent::MoveCursor(pos) => self.cursor = pos,
            Intent::PlayCursor => self.play(self.cursor),
            Intent::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Intent::NewGame => self.start_next_game(),
            Intent::Quit => {
                info!(tally = ?self.tally, "Quitting");
                return AppAction::Quit;
            }
            Intent::Ignore => {}
        }
        AppAction::Continue
    }

    fn play(&mut self, pos: Position) {
        // A finished game stays on screen until the next move key.
        if self.engine.phase() == Phase::GameOver {
            self.start_next_game();
            return;
        }

        match self.engine.apply_human_move(pos.row(), pos.col()) {
            Ok(outcome) => {
                self.record(outcome);
                self.status_message = self.outcome_message(outcome);
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}", e);
            }
        }
    }

    fn start_next_game(&mut self) {
        self.engine.new_game();
        self.cursor = Position::Center;
        self.status_message = self.opening_message();
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Draw => self.tally.draws += 1,
            Outcome::Win(p) if p == self.engine.human_symbol() => self.tally.wins += 1,
            Outcome::Win(_) => self.tally.losses += 1,
        }
    }

    fn opening_message(&self) -> String {
        let human = self.engine.human_symbol();
        match self.engine.last_computer_move() {
            Some(pos) => format!("Computer opened at {}. You are {}, your move.", pos, human),
            None => format!("You are {} and move first.", human),
        }
    }

    fn outcome_message(&self, outcome: Outcome) -> String {
        let human = self.engine.human_symbol();
        match outcome {
            Outcome::InProgress => match self.engine.last_computer_move() {
                Some(pos) => format!("Computer played {}. Your move.", pos),
                None => "Your move.".to_string(),
            },
            Outcome::Win(p) if p == human => "Victory! Press Enter or N for a new game.".to_string(),
            Outcome::Win(_) => "Defeat. Press Enter or N for a new game.".to_string(),
            Outcome::Draw => "Draw. Press Enter or N for a new game.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_tictactoe::{Cell, FirstPlayer, Player};

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), AppAction::Continue);
        }
    }

    #[test]
    fn test_starts_with_human_to_move() {
        let app = App::new(Settings::default());
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.board(), Board::new());
        assert_eq!(app.status_message(), "You are X and move first.");
    }

    #[test]
    fn test_computer_opening_is_announced() {
        let app = App::new(Settings {
            first_player: FirstPlayer::Computer,
        });
        assert_eq!(app.board().get(Position::TopLeft), Cell::Occupied(Player::X));
        assert!(app.status_message().starts_with("Computer opened at Top-left"));
    }

    #[test]
    fn test_cursor_play_gets_reply() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.handle_key(KeyCode::Enter), AppAction::Continue);

        let board = app.board();
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::O));
        assert_eq!(app.status_message(), "Computer played Top-left (0, 0). Your move.");
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let mut app = App::new(Settings::default());
        press(&mut app, "5");
        let before = app.board();

        press(&mut app, "1");
        assert_eq!(app.board(), before);
        assert!(app.status_message().starts_with("Invalid move:"));
    }

    #[test]
    fn test_loss_is_tallied_and_next_game_flips() {
        // Row-major weak play: X at 1, 2, 4 loses to O's diagonal.
        let mut app = App::new(Settings::default());
        press(&mut app, "124");

        assert_eq!(
            app.engine().current_outcome(),
            Outcome::Win(Player::O)
        );
        assert_eq!(app.status_message(), "Defeat. Press Enter or N for a new game.");
        assert_eq!(
            app.tally(),
            Tally {
                wins: 0,
                losses: 1,
                draws: 0
            }
        );

        // Any move key after the result starts the next game.
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().human_symbol(), Player::O);
        assert_eq!(app.board().count(Player::X), 1);
        assert_eq!(app.tally().losses, 1);
    }

    #[test]
    fn test_new_game_key_and_quit() {
        let mut app = App::new(Settings::default());
        press(&mut app, "5n");
        assert_eq!(app.engine().first_player(), FirstPlayer::Computer);
        assert_eq!(app.tally(), Tally::default());

        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}
