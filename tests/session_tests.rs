//! Integration tests for game sessions
//!
//! Drives whole games through [`Session`] with seeded players, so every run
//! plays the same moves.

use amazons::config::{PlayerKind, Settings};
use amazons::player::{AiPlayer, RandomPlayer};
use amazons::{AppError, Session};
use amazons_engine::api::new_game;
use amazons_engine::search::SearchConfig;
use amazons_engine::{Board, EngineError, Piece};

fn random_settings(seed: u64) -> Settings {
    Settings {
        white: PlayerKind::Random,
        black: PlayerKind::Random,
        seed,
        ..Settings::default()
    }
}

/// Replays `moves` from the start, checking each one as it goes.
fn replay(moves: &[amazons_engine::Move]) -> Board {
    let mut board = new_game();
    for &mv in moves {
        assert!(board.is_legal_move(mv), "{mv} illegal at ply {}", board.num_moves());
        board.make_move(mv);
    }
    board
}

#[test]
fn test_random_game_runs_to_a_winner() {
    //! Random players always finish: every ply burns a square, so the game
    //! cannot outlast the board.

    let report = Session::from_settings(&random_settings(3))
        .expect("default settings are valid")
        .play()
        .expect("session runs");

    let winner = report.winner.expect("game ends without a ply limit");
    assert_eq!(winner.opponent(), report.final_board.turn());
    assert!(report.moves.len() <= 92);
    assert_eq!(replay(&report.moves), report.final_board);
}

#[test]
fn test_same_seed_same_game() {
    let first = Session::from_settings(&random_settings(11))
        .expect("valid")
        .play()
        .expect("session runs");
    let second = Session::from_settings(&random_settings(11))
        .expect("valid")
        .play()
        .expect("session runs");
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.winner, second.winner);
}

#[test]
fn test_max_plies_stops_early() {
    let settings = Settings {
        max_plies: Some(6),
        ..random_settings(5)
    };
    let report = Session::from_settings(&settings)
        .expect("valid")
        .play()
        .expect("session runs");
    assert_eq!(6, report.moves.len());
    assert_eq!(None, report.winner);
    assert_eq!(Piece::White, report.final_board.turn());
}

#[test]
fn test_ai_against_random() {
    //! The search player has to produce legal moves the session accepts,
    //! in both colors.

    let session = Session::new(
        new_game(),
        Box::new(AiPlayer::new(Piece::White, SearchConfig::default())),
        Box::new(RandomPlayer::new(Piece::Black, 9)),
    )
    .with_max_plies(4);
    let report = session.play().expect("session runs");
    assert_eq!(4, report.moves.len());
    assert_eq!(replay(&report.moves), report.final_board);

    let session = Session::new(
        new_game(),
        Box::new(RandomPlayer::new(Piece::White, 9)),
        Box::new(AiPlayer::new(Piece::Black, SearchConfig::default())),
    )
    .with_max_plies(3);
    assert_eq!(3, session.play().expect("session runs").moves.len());
}

#[test]
fn test_opening_is_applied() {
    let settings = Settings {
        opening: vec!["d1-d7(g7)".to_string(), "a7-b6(a7)".to_string()],
        max_plies: Some(0),
        ..random_settings(1)
    };
    let session = Session::from_settings(&settings).expect("legal opening");
    assert_eq!(2, session.board().num_moves());
    assert_eq!(Piece::White, session.board().turn());

    let report = session.play().expect("session runs");
    assert_eq!(2, report.moves.len());
}

#[test]
fn test_illegal_opening_is_rejected() {
    let settings = Settings {
        opening: vec!["a7-a8(a9)".to_string()],
        ..random_settings(1)
    };
    let err = Session::from_settings(&settings).err().expect("black cannot open");
    assert!(matches!(
        err,
        AppError::Engine(EngineError::IllegalMove { .. })
    ));
}

#[test]
fn test_step_after_game_over_is_noop() {
    let mut session = Session::from_settings(&random_settings(21)).expect("valid");
    while session.step().expect("step").is_some() {}
    let finished = session.board().clone();
    assert!(finished.winner().is_some());

    assert_eq!(None, session.step().expect("step"));
    assert_eq!(&finished, session.board());
}
