//! Non-interactive commands: `solve` and `selfplay`.

use anyhow::{Context, Result, bail};
use minimax_tictactoe::invariants::{BoardInvariants, InvariantSet};
use minimax_tictactoe::{Board, Outcome, Player, classify, search};
use std::fmt::Write;
use tracing::{info, instrument};

/// Reports the computer's move for `board` with `to_move` to play.
///
/// When `to_move` is `None` the side is inferred from the mark counts.
#[instrument]
pub fn solve(board: &str, to_move: Option<Player>) -> Result<String> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;

    if let Err(violations) = BoardInvariants::check_all(&board) {
        let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
        bail!("Unreachable board: {}", reasons.join("; "));
    }

    let mut out = format!("{}\n", board);
    let outcome = classify(&board);
    if outcome.is_terminal() {
        writeln!(out, "Game over: {}", outcome)?;
        return Ok(out);
    }

    let to_move = to_move.unwrap_or_else(|| board.next_player());
    let report = search(&board, to_move);
    writeln!(
        out,
        "{} plays {} (score {}, {} nodes)",
        to_move, report.position, report.score, report.nodes
    )?;
    Ok(out)
}

/// Plays the engine against itself from the empty board.
#[instrument]
pub fn selfplay() -> Result<String> {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let mut out = String::new();

    while classify(&board) == Outcome::InProgress {
        let report = search(&board, to_move);
        board = board.with(report.position, to_move);
        writeln!(out, "{} plays {}", to_move, report.position)?;
        writeln!(out, "{}\n", board)?;
        to_move = to_move.opponent();
    }

    let outcome = classify(&board);
    info!(%outcome, "Self-play finished");
    writeln!(out, "{}", outcome)?;
    Ok(out)
}
