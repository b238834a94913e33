//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::action::Rejection;
use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::position::Position;
use crate::round::Round;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// A failed precondition means the action is ignored.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the round must still be in progress.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves on a decided round.
    pub fn check(round: &Round) -> Result<(), Rejection> {
        if round.outcome().is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves on an occupied square.
    pub fn check(pos: Position, round: &Round) -> Result<(), Rejection> {
        if round.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Round in progress (checked first)
/// - Square empty
///
/// Postconditions:
/// - Exactly one more occupied square
/// - Turn flipped
/// - All [`RoundInvariants`] hold
pub struct MoveContract;

impl Contract<Round, Position> for MoveContract {
    fn pre(round: &Round, pos: &Position) -> Result<(), Rejection> {
        RoundInProgress::check(round)?;
        SquareIsEmpty::check(*pos, round)
    }

    #[instrument(skip_all)]
    fn post(before: &Round, after: &Round) -> Result<(), EngineError> {
        let mut failures = Vec::new();

        if after.board().filled() != before.board().filled() + 1 {
            failures.push("Exactly one square filled per move".to_string());
        }

        if after.to_move() != before.to_move().opponent() {
            failures.push("Turn flips once per move".to_string());
        }

        if let Err(violations) = RoundInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            warn!(%descriptions, "Move postcondition failed");
            Err(EngineError::new(EngineErrorKind::InvariantViolation(
                format!("Postcondition failed: {}", descriptions),
            )))
        }
    }
}
