//! Move sources for a session
//!
//! A [`Player`] looks at the live board and names its move. The session
//! validates and applies it; players never mutate the game board.

use crate::config::{PlayerKind, Settings};
use crate::error::AppResult;
use amazons_engine::api::reply;
use amazons_engine::search::SearchConfig;
use amazons_engine::{Board, EngineError, Move, Piece};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::debug;

/// Something that picks moves for one side
pub trait Player {
    fn side(&self) -> Piece;

    fn name(&self) -> &'static str;

    /// Move for `board`, where it is this player's turn and the game is not over.
    fn choose_move(&mut self, board: &Board) -> AppResult<Move>;
}

/// Plays the alpha-beta search's choice
pub struct AiPlayer {
    side: Piece,
    config: SearchConfig,
}

impl AiPlayer {
    pub fn new(side: Piece, config: SearchConfig) -> Self {
        AiPlayer { side, config }
    }
}

impl Player for AiPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn name(&self) -> &'static str {
        "ai"
    }

    fn choose_move(&mut self, board: &Board) -> AppResult<Move> {
        let outcome = reply(board, &self.config)?;
        debug!(
            "[AI] {} depth={} score={} nodes={}",
            self.side, outcome.depth, outcome.score, outcome.stats.nodes
        );
        outcome.best_move.ok_or_else(|| {
            EngineError::GameOver {
                winner: self.side.opponent(),
            }
            .into()
        })
    }
}

/// Plays a uniformly random legal move
pub struct RandomPlayer {
    side: Piece,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(side: Piece, seed: u64) -> Self {
        RandomPlayer {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> AppResult<Move> {
        board
            .legal_moves(self.side)
            .choose(&mut self.rng)
            .ok_or_else(|| {
                EngineError::GameOver {
                    winner: self.side.opponent(),
                }
                .into()
            })
    }
}

/// Build the player `settings` assigns to `side`.
pub fn create_player(side: Piece, settings: &Settings) -> Box<dyn Player> {
    let (kind, seed) = match side {
        Piece::Black => (settings.black, settings.seed.wrapping_add(1)),
        _ => (settings.white, settings.seed),
    };
    match kind {
        PlayerKind::Ai => Box::new(AiPlayer::new(side, settings.search_config())),
        PlayerKind::Random => Box::new(RandomPlayer::new(side, seed)),
    }
}
