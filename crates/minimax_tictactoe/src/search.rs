//! Full-depth minimax search for perfect play.
//!
//! The game tree from any tic-tac-toe position is small enough (about
//! 550k nodes from the empty board) that the search always runs to terminal
//! positions. There is no depth limit, no heuristic and no pruning.

use super::rules::{check_winner, classify, is_full};
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a terminal position won by the searching player.
pub const WIN_SCORE: i32 = 10;

/// Score of a terminal position won by the opponent.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn terminal position.
pub const DRAW_SCORE: i32 = 0;

/// What a top-level search found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move.
    pub position: Position,
    /// Minimax value of the chosen move, from the searcher's point of view.
    pub score: i32,
    /// Number of positions evaluated.
    pub nodes: u64,
}

/// Returns the optimal move for `symbol` on `board`.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn best_move(board: &Board, symbol: Player) -> Position {
    search(board, symbol).position
}

/// Searches `board` for `symbol` and reports the chosen move with its score.
///
/// An empty cell that completes a line for `symbol` is taken at once (first
/// in row-major order). Otherwise every empty cell is scored by minimax and
/// the first cell, in row-major order, with the strictly highest score wins.
///
/// # Panics
///
/// Panics if the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, symbol: Player) -> SearchReport {
    assert!(
        !is_full(board),
        "search called on a full board:\n{}",
        board
    );

    if let Some(position) = immediate_win(board, symbol) {
        debug!(%position, "Taking immediate win");
        return SearchReport {
            position,
            score: WIN_SCORE,
            nodes: 1,
        };
    }

    let mut nodes = 0;
    let mut best: Option<(Position, i32)> = None;

    for position in board.empty_positions() {
        let child = board.with(position, symbol);
        let score = minimax(&child, symbol, symbol.opponent(), &mut nodes);
        debug!(%position, score, "Scored candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    let Some((position, score)) = best else {
        unreachable!("non-full board has an empty cell");
    };

    debug!(%position, score, nodes, "Search complete");
    SearchReport {
        position,
        score,
        nodes,
    }
}

/// First empty cell that wins on the spot for `symbol`.
fn immediate_win(board: &Board, symbol: Player) -> Option<Position> {
    board
        .empty_positions()
        .find(|pos| check_winner(&board.with(*pos, symbol)) == Some(symbol))
}

/// Minimax value of `board` for `me`, with `to_move` about to play.
fn minimax(board: &Board, me: Player, to_move: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match classify(board) {
        Outcome::Win(winner) if winner == me => return WIN_SCORE,
        Outcome::Win(_) => return LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::InProgress => {}
    }

    let scores = board
        .empty_positions()
        .map(|pos| minimax(&board.with(pos, to_move), me, to_move.opponent(), nodes));

    let value = if to_move == me {
        scores.max()
    } else {
        scores.min()
    };

    // An in-progress board always has an empty cell.
    value.unwrap_or(DRAW_SCORE)
}
