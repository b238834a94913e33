//! Board evaluation: win, draw or still in progress.

use super::draw::is_full;
use super::win::{WinningLine, check_winner};
use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Evaluation {
    /// Classification of the board.
    pub outcome: Outcome,
    /// The line that produced a win. `None` for a draw or an open board.
    pub winning_line: Option<WinningLine>,
}

/// Evaluates a board.
///
/// Pure and deterministic: a complete line wins (first line in [`LINES`]
/// order), otherwise a full board is a draw, otherwise the round is still
/// in progress.
///
/// [`LINES`]: super::win::LINES
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation {
            outcome: Outcome::win(player),
            winning_line: Some(line),
        };
    }

    if is_full(board) {
        return Evaluation {
            outcome: Outcome::Draw,
            winning_line: None,
        };
    }

    Evaluation::default()
}
