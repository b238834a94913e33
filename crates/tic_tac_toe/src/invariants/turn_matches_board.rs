//! Turn invariant: the player to move follows from the mark counts.

use super::Invariant;
use crate::round::Round;
use crate::types::Player;

/// Invariant: X moves when the counts are equal, O when X leads by one.
///
/// Equivalent to "after n accepted moves, X is to move iff n is even".
pub struct TurnMatchesBoardInvariant;

impl Invariant<Round> for TurnMatchesBoardInvariant {
    fn holds(round: &Round) -> bool {
        let x = round.board().count(Player::X);
        let o = round.board().count(Player::O);

        let expected = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return false;
        };

        round.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
