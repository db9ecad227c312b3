//! Tests for session behavior: score accrual across rounds.

use noughts::{Player, Position, Session, Square};

/// X 0, O 1, X 3, O 2, X 6: X takes the left column.
fn play_x_wins_left_column(session: &mut Session) {
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::TopRight,
        Position::BottomLeft,
    ] {
        session.play(pos).expect("legal move");
    }
}

/// Legal alternating fill ending X O X / O X X / O X O, no line.
fn play_drawn_round(session: &mut Session) {
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomCenter,
    ] {
        session.play(pos).expect("legal move");
    }
}

#[test]
fn test_new_session_scoreboard_is_zero() {
    let session = Session::new();
    assert_eq!(*session.scoreboard().x(), 0);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 0);
}

#[test]
fn test_x_win_scores_once() {
    let mut session = Session::new();
    play_x_wins_left_column(&mut session);

    let outcome = session.game().outcome().expect("round is over");
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(
        outcome.line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
    assert_eq!(*session.scoreboard().x(), 1);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 0);
}

#[test]
fn test_draw_scores_once() {
    let mut session = Session::new();
    play_drawn_round(&mut session);

    assert!(session.game().outcome().expect("round is over").is_draw());
    assert_eq!(*session.scoreboard().x(), 0);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 1);
}

#[test]
fn test_finished_round_ignores_further_plays() {
    let mut session = Session::new();
    play_x_wins_left_column(&mut session);

    let snapshot = session.clone();

    // Occupied and empty squares alike: nothing changes until reset.
    for pos in Position::ALL {
        let _ = session.play(pos);
    }

    assert_eq!(session, snapshot);
    assert_eq!(*session.scoreboard().x(), 1);
}

#[test]
fn test_rejected_move_leaves_turn_and_score() {
    let mut session = Session::new();
    session.play(Position::Center).expect("legal move");
    assert_eq!(session.game().to_move(), Player::O);

    let snapshot = session.clone();
    assert!(session.play(Position::Center).is_err());

    assert_eq!(session, snapshot);
    assert_eq!(session.game().to_move(), Player::O);
}

#[test]
fn test_reset_clears_round_but_keeps_score() {
    let mut session = Session::new();
    play_x_wins_left_column(&mut session);
    session.reset_game();

    assert_eq!(session.game().to_move(), Player::X);
    assert_eq!(session.game().outcome(), None);
    assert!(session.game().history().is_empty());
    for pos in Position::ALL {
        assert_eq!(session.game().board().get(pos), Square::Empty);
    }
    assert_eq!(*session.scoreboard().x(), 1);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 0);
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut session = Session::new();

    play_x_wins_left_column(&mut session);
    session.reset_game();
    play_drawn_round(&mut session);
    session.reset_game();
    play_x_wins_left_column(&mut session);

    assert_eq!(*session.scoreboard().x(), 2);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 1);
}

#[test]
fn test_reset_mid_round_scores_nothing() {
    let mut session = Session::new();
    session.play(Position::Center).expect("legal move");
    session.reset_game();

    assert_eq!(*session.scoreboard().x(), 0);
    assert_eq!(*session.scoreboard().o(), 0);
    assert_eq!(*session.scoreboard().draws(), 0);
}
