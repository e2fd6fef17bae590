//! Public API for the Amazons engine
//!
//! Checked entry points for code that drives a game: moves are validated
//! before they reach the board, and misuse comes back as an [`EngineError`]
//! instead of a corrupted position.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, undo_move, is_legal_move)
//! - `state` - Game state queries and AI (get_game_state, reply)
//!
//! [`EngineError`]: crate::error::EngineError

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, is_legal_move, undo_move};
pub use state::{get_game_state, reply};
