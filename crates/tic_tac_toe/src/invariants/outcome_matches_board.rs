//! Outcome invariant: the stored outcome is what the board evaluates to.

use super::Invariant;
use crate::round::Round;
use crate::rules::evaluate;

/// Invariant: the round's outcome and winning line equal a fresh evaluation.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<Round> for OutcomeMatchesBoardInvariant {
    fn holds(round: &Round) -> bool {
        let eval = evaluate(round.board());
        eval.outcome == round.outcome() && eval.winning_line == round.winning_line()
    }

    fn description() -> &'static str {
        "Outcome and winning line match the board"
    }
}
