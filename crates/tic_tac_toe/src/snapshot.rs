//! Read-only view of a session for the presentation layer.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::score::Score;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One board cell as the presentation sees it: `None` when empty.
pub type Cell = Option<Player>;

/// Snapshot of the session after an intent.
///
/// Serializes with the field names the web view used:
/// `board`, `currentPlayer`, `outcome`, `winningLine`, `score`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: [Cell; 9],
    /// The player to move next.
    pub current_player: Player,
    /// Classification of the board.
    pub outcome: Outcome,
    /// Indices of the completed line, for highlighting.
    pub winning_line: Option<[usize; 3]>,
    /// Score across rounds.
    pub score: Score,
}

impl Snapshot {
    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board[pos.to_index()]
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos.to_index()))
    }

    /// Returns true once the round is decided.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns true if clicking `pos` would place a mark.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.is_over() && self.cell(pos).is_none()
    }
}
