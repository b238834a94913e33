//! First-class action types for tic-tac-toe.
//!
//! Intents are what the presentation forwards; move outcomes are what the
//! engine reports back for a single move.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was clicked (raw index, validated on dispatch).
    CellClicked(usize),
    /// Start a new round, keeping the score.
    RestartClicked,
    /// Start a new round and clear the score.
    ResetClicked,
}

/// Why a move was ignored.
///
/// Ignored moves are a defined no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The round is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed {
        /// The player who moved.
        player: Player,
        /// Where the mark was placed.
        position: Position,
        /// The round's outcome after the move.
        outcome: Outcome,
    },
    /// The move had no effect.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Placed {
                player, position, ..
            } => write!(f, "{} -> {}", player, position.label()),
            MoveOutcome::Ignored(reason) => write!(f, "Ignored: {}", reason),
        }
    }
}
