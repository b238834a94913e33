//! Session management: the current round plus the score.

use crate::action::{Intent, MoveOutcome};
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::error::EngineError;
use crate::position::Position;
use crate::round::Round;
use crate::score::Score;
use crate::snapshot::Snapshot;
use crate::types::Player;
use tracing::{debug, info, instrument, warn};

/// A play session.
///
/// Owns all mutable game state. The presentation holds the session and
/// reads [`Snapshot`]s from it; it never keeps a copy that can diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    round: Round,
    score: Score,
}

impl Session {
    /// Creates a session with an empty board, X to move and a zero score.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new session");
        Self::default()
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the score across rounds.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.round.to_move()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// A move on a decided round or an occupied square is ignored and
    /// leaves the session unchanged. A move that decides the round counts
    /// it in the score exactly once.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a postcondition fails, leaving the
    /// session unchanged. This is only checked in debug builds.
    #[instrument(skip(self), fields(player = %self.round.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome, EngineError> {
        // Work on a candidate so a failed postcondition leaves the session
        // as it was.
        let mut next = self.round.clone();
        let result = next.place(pos);

        if let MoveOutcome::Placed {
            player, outcome, ..
        } = result
        {
            #[cfg(debug_assertions)]
            MoveContract::post(&self.round, &next)?;

            self.round = next;
            info!(%player, position = %pos, %outcome, "Move applied");

            // Placed implies the round was in progress, so this is the
            // transition into a terminal outcome.
            if outcome.is_terminal() {
                self.score.record(outcome);
                info!(
                    %outcome,
                    x = self.score.x(),
                    o = self.score.o(),
                    draws = self.score.draws(),
                    "Round decided"
                );
            }
        }

        Ok(result)
    }

    /// Places the current player's mark at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineErrorKind::InvalidIndex`] for indices outside
    /// 0-8, leaving the session unchanged.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let pos = Position::try_from(index).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        self.apply_move(pos)
    }

    /// Starts a new round. The score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting round");
        self.round = Round::new();
    }

    /// Starts a new round and zeroes the score.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting round and score");
        self.round = Round::new();
        self.score.clear();
    }

    /// Applies a presentation intent and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Fails only for a cell index outside 0-8.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Snapshot, EngineError> {
        debug!(?intent, "Dispatching intent");
        match intent {
            Intent::CellClicked(index) => {
                self.apply_index(index)?;
            }
            Intent::RestartClicked => self.restart(),
            Intent::ResetClicked => self.reset_all(),
        }
        Ok(self.snapshot())
    }

    /// Returns a read-only view of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.round.board().squares().map(|square| square.player()),
            current_player: self.round.to_move(),
            outcome: self.round.outcome(),
            winning_line: self.round.winning_line().map(|line| line.indices()),
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineErrorKind, Outcome, Rejection};

    fn play(session: &mut Session, indices: &[usize]) {
        for &index in indices {
            session.apply_index(index).unwrap();
        }
    }

    #[test]
    fn test_win_counts_once() {
        let mut session = Session::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.round().outcome(), Outcome::WinX);
        assert_eq!(session.score().x(), 1);

        // Further clicks on the decided round never touch the score.
        for index in 0..9 {
            let result = session.apply_index(index).unwrap();
            assert_eq!(result, MoveOutcome::Ignored(Rejection::GameOver));
        }
        assert_eq!(session.score().x(), 1);
    }

    #[test]
    fn test_invalid_index_leaves_state() {
        let mut session = Session::new();
        play(&mut session, &[4]);
        let before = session.clone();

        let err = session.apply_index(9).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::InvalidIndex(9));
        assert_eq!(session, before);
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut session = Session::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.restart();

        assert_eq!(session.round(), &Round::new());
        assert_eq!(session.score().x(), 1);
    }

    #[test]
    fn test_reset_all_clears_score() {
        let mut session = Session::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset_all();

        assert_eq!(session, Session::new());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_leaves_session() {
        use crate::types::Square;

        let mut session = Session::new();
        play(&mut session, &[0, 3, 1, 4]);
        // An extra X outside of a move unbalances the marks.
        session
            .round
            .board
            .set(Position::BottomLeft, Square::Occupied(Player::X));
        let before = session.clone();

        // Would complete the top row if it were accepted.
        let err = session.apply_move(Position::TopRight).unwrap_err();
        assert!(matches!(err.kind, EngineErrorKind::InvariantViolation(_)));
        assert_eq!(session, before);
        assert_eq!(session.round().outcome(), Outcome::InProgress);
        assert_eq!(session.score().rounds(), 0);
    }

    #[test]
    fn test_dispatch_returns_snapshot() {
        let mut session = Session::new();
        let snapshot = session.dispatch(Intent::CellClicked(4)).unwrap();

        assert_eq!(snapshot.cell(Position::Center), Some(Player::X));
        assert_eq!(snapshot.current_player, Player::O);
        assert_eq!(snapshot, session.snapshot());
    }
}
