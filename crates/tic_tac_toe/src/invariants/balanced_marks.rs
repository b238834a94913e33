//! Balanced marks invariant: X leads O by at most one mark.

use super::Invariant;
use crate::round::Round;
use crate::types::Player;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// X always moves first and turns alternate, so any other count means a
/// square was written outside of a move.
pub struct BalancedMarksInvariant;

impl Invariant<Round> for BalancedMarksInvariant {
    fn holds(round: &Round) -> bool {
        let x = round.board().count(Player::X);
        let o = round.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
