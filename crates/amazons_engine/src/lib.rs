//! # Amazons Engine
//!
//! Board representation, lazy move generation and an alpha-beta search for
//! the Game of the Amazons on a 10x10 board.
//!
//! Each turn a queen slides like a chess queen, then throws a spear the same
//! way from where it landed. Spears block squares for the rest of the game,
//! and a side with no legal move on its turn loses.
//!
//! ```rust
//! use amazons_engine::api::{do_move, new_game, reply};
//! use amazons_engine::search::SearchConfig;
//!
//! let mut board = new_game();
//! do_move(&mut board, "d1-d7(g7)".parse().unwrap()).unwrap();
//! let outcome = reply(&board, &SearchConfig::default()).unwrap();
//! assert!(board.is_legal_move(outcome.best_move.unwrap()));
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod square;
pub mod types;

pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use square::Square;
pub use types::{GameState, Move, Piece};
