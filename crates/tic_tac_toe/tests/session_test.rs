//! Tests for the session: moves, restarts and scoring.

use tic_tac_toe::{
    EngineErrorKind, Intent, MoveOutcome, Outcome, Player, Position, Rejection, Session, Square,
};

fn play(session: &mut Session, indices: &[usize]) {
    for &index in indices {
        let result = session.apply_index(index).expect("Valid index");
        assert!(result.is_placed(), "move {index} was ignored");
    }
}

#[test]
fn test_first_move_places_x() {
    let mut session = Session::new();
    let result = session.apply_move(Position::TopLeft).expect("Valid move");

    assert_eq!(
        result,
        MoveOutcome::Placed {
            player: Player::X,
            position: Position::TopLeft,
            outcome: Outcome::InProgress,
        }
    );
    let round = session.round();
    assert_eq!(round.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(round.to_move(), Player::O);
    assert_eq!(round.outcome(), Outcome::InProgress);
}

#[test]
fn test_repeated_move_is_ignored() {
    let mut session = Session::new();
    play(&mut session, &[0]);
    let after_first = session.clone();

    let result = session.apply_move(Position::TopLeft).expect("Valid move");
    assert_eq!(
        result,
        MoveOutcome::Ignored(Rejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(session, after_first);
}

#[test]
fn test_win_restart_and_reset() {
    let mut session = Session::new();
    play(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(session.round().outcome(), Outcome::WinX);
    assert_eq!(session.score().x(), 1);

    session.restart();
    assert_eq!(session.round().board().filled(), 0);
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.round().outcome(), Outcome::InProgress);
    assert_eq!(session.round().winning_line(), None);
    assert_eq!(session.score().x(), 1);

    session.reset_all();
    assert_eq!(session.score().x(), 0);
    assert_eq!(session.score().rounds(), 0);
}

#[test]
fn test_o_win_and_draw_are_counted() {
    let mut session = Session::new();
    // O takes the middle column.
    play(&mut session, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(session.round().outcome(), Outcome::WinO);

    session.restart();
    play(&mut session, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert_eq!(session.round().outcome(), Outcome::Draw);

    let score = session.score();
    assert_eq!((score.x(), score.o(), score.draws()), (0, 1, 1));
}

#[test]
fn test_moves_after_decision_change_nothing() {
    let mut session = Session::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    let decided = session.clone();

    for pos in Position::ALL {
        assert_eq!(
            session.apply_move(pos).expect("Valid move"),
            MoveOutcome::Ignored(Rejection::GameOver)
        );
    }
    assert_eq!(session, decided);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut session = Session::new();
    let err = session
        .dispatch(Intent::CellClicked(42))
        .expect_err("Index out of range");

    assert_eq!(err.kind, EngineErrorKind::InvalidIndex(42));
    assert_eq!(session, Session::new());
}

#[test]
fn test_intents_drive_the_session() {
    let mut session = Session::new();
    for index in [0, 3, 1, 4, 2] {
        session.dispatch(Intent::CellClicked(index)).expect("Valid index");
    }

    let snapshot = session.dispatch(Intent::RestartClicked).expect("Restart");
    assert_eq!(snapshot.board, [None; 9]);
    assert_eq!(snapshot.score.x(), 1);

    let snapshot = session.dispatch(Intent::ResetClicked).expect("Reset");
    assert_eq!(snapshot.score.x(), 0);
    assert_eq!(snapshot.current_player, Player::X);
}

#[test]
fn test_valid_moves_shrink_as_the_round_fills() {
    let mut session = Session::new();
    assert_eq!(session.round().valid_moves().len(), 9);
    play(&mut session, &[4, 0]);
    let valid = session.round().valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::Center));
}
