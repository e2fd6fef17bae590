//! Game controller
//!
//! A [`Session`] owns the live board and two players. Each step asks the
//! player whose turn it is for a move, checks it through the engine API and
//! applies it. The search only ever sees the board by shared reference and
//! works on its own copy.

use crate::config::Settings;
use crate::error::AppResult;
use crate::player::{create_player, Player};
use amazons_engine::api::{do_move, get_game_state, new_game};
use amazons_engine::{Board, GameState, Move, Piece};
use tracing::info;

/// How a session ended
#[derive(Debug, Clone)]
pub struct GameReport {
    /// `None` if the ply limit was hit first.
    pub winner: Option<Piece>,
    pub moves: Vec<Move>,
    pub final_board: Board,
}

pub struct Session {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    max_plies: Option<u32>,
}

impl Session {
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        debug_assert_eq!(Piece::White, white.side());
        debug_assert_eq!(Piece::Black, black.side());
        Session {
            board,
            white,
            black,
            max_plies: None,
        }
    }

    /// Session described by `settings`, with its opening already played.
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        settings.validate()?;
        let mut board = new_game();
        for mv in settings.opening_moves()? {
            do_move(&mut board, mv)?;
            info!("[GAME] Opening {}", mv);
        }
        let mut session = Session::new(
            board,
            create_player(Piece::White, settings),
            create_player(Piece::Black, settings),
        );
        session.max_plies = settings.max_plies;
        Ok(session)
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one move. Returns `None` without doing anything once the game is won.
    pub fn step(&mut self) -> AppResult<Option<Move>> {
        let side = match get_game_state(&self.board) {
            GameState::Won { .. } => return Ok(None),
            GameState::Playing { turn } => turn,
        };
        let player = match side {
            Piece::Black => &mut self.black,
            _ => &mut self.white,
        };
        let mv = player.choose_move(&self.board)?;
        do_move(&mut self.board, mv)?;
        info!(
            "[GAME] {} {} ({}) plays {}",
            self.board.num_moves(),
            side,
            player.name(),
            mv
        );
        Ok(Some(mv))
    }

    /// Plays until someone is immobilized or the ply limit is reached.
    pub fn play(mut self) -> AppResult<GameReport> {
        let start = self.board.num_moves();
        loop {
            let played = (self.board.num_moves() - start) as u32;
            if self.max_plies.is_some_and(|max| played >= max) {
                info!("[GAME] Stopped after {} plies", played);
                break;
            }
            if self.step()?.is_none() {
                break;
            }
        }

        let winner = self.board.winner();
        if let Some(winner) = winner {
            info!(
                "[GAME] {} wins after {} moves",
                winner,
                self.board.num_moves()
            );
        }
        Ok(GameReport {
            winner,
            moves: self.board.history().to_vec(),
            final_board: self.board,
        })
    }
}
