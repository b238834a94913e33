//! Round outcome classification.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of the current board.
///
/// Derived from the board by [`crate::evaluate`]; never set by a move.
/// Serializes as `"None"`, `"WinX"`, `"WinO"` or `"Draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty square.
    #[default]
    #[serde(rename = "None")]
    InProgress,
    /// Player X completed a line.
    WinX,
    /// Player O completed a line.
    WinO,
    /// Board full with no line complete.
    Draw,
}

impl Outcome {
    /// Returns the winning outcome for `player`.
    pub fn win(player: Player) -> Self {
        match player {
            Player::X => Outcome::WinX,
            Player::O => Outcome::WinO,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::WinX => Some(Player::X),
            Outcome::WinO => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the round is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::WinX => write!(f, "Player X wins"),
            Outcome::WinO => write!(f, "Player O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
