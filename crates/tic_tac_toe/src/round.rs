//! A single round of tic-tac-toe.
//!
//! A round runs from an empty board to a terminal outcome. It owns the
//! board, the turn and the derived outcome, but never the score.

use crate::action::{MoveOutcome, Rejection};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules::{WinningLine, evaluate};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// One round of tic-tac-toe.
///
/// State machine: `InProgress -> {InProgress | WinX | WinO | Draw}`.
/// Once terminal, [`Round::place`] is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
    pub(crate) winning_line: Option<WinningLine>,
}

impl Round {
    /// Creates a round with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            winning_line: None,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored (state unchanged) if the round is decided or the square is
    /// occupied. Otherwise the mark is placed, the turn flips and the
    /// outcome is re-evaluated from the board.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &pos) {
            debug!(%reason, "Move ignored");
            return MoveOutcome::Ignored(reason);
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.to_move = player.opponent();

        let eval = evaluate(&self.board);
        self.outcome = eval.outcome;
        self.winning_line = eval.winning_line;

        MoveOutcome::Placed {
            player,
            position: pos,
            outcome: self.outcome,
        }
    }

    /// Returns why a move at `pos` would be ignored, without applying it.
    pub fn check_move(&self, pos: Position) -> Result<(), Rejection> {
        MoveContract::pre(self, &pos)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the completed line, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns true once the round is decided.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the positions still open for a move.
    ///
    /// Empty once the round is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
