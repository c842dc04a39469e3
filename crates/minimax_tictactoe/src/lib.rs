//! Perfect-play tic-tac-toe engine.
//!
//! A human plays against a computer that searches the full game tree with
//! minimax and never loses.
//!
//! # Architecture
//!
//! - **Board**: `Copy` value holding the 3x3 grid
//! - **Rules**: pure terminal-state classification
//! - **Search**: full-depth minimax choosing the computer's move
//! - **Engine**: owns the board and alternates human and computer turns
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameEngine, Outcome, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.human_symbol(), Player::X);
//!
//! // Human takes the center; the computer answers in a corner.
//! let outcome = engine.apply_human_move(1, 1).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(engine.last_computer_move(), Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
mod search;
mod settings;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Cell, Outcome, ParseBoardError, Player};

// Crate-level exports - Rules
pub use rules::classify;

// Crate-level exports - Search
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchReport, WIN_SCORE, best_move, search};

// Crate-level exports - Engine
pub use engine::{GameEngine, Phase};
pub use error::InvalidMove;
pub use settings::{FirstPlayer, Settings};
