//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::Player;
use std::path::PathBuf;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "minimax_tictactoe=trace" (overrides RUST_LOG and the config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Let the computer open the first game
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the computer's move for a board, e.g. "XX./OO./..."
    Solve {
        /// Nine cells in row-major order; `/`, `|` and spaces are ignored
        board: String,

        /// Side to move (inferred from the mark counts if omitted)
        #[arg(long, value_enum)]
        to_move: Option<Side>,
    },

    /// Let the engine play both sides and print every position
    Selfplay,
}

/// Symbol accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player X
    #[value(name = "X", alias = "x")]
    X,
    /// Player O
    #[value(name = "O", alias = "o")]
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
