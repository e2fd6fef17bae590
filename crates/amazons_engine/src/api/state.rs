//! Game state queries and AI move generation

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::search::{find_best_move, SearchConfig, SearchOutcome};
use crate::types::GameState;

/// Get current game state (playing or won)
pub fn get_game_state(board: &Board) -> GameState {
    match board.winner() {
        Some(winner) => GameState::Won { winner },
        None => GameState::Playing { turn: board.turn() },
    }
}

/// Get the AI's response to the current position
///
/// # Errors
///
/// [`EngineError::GameOver`] if the side to move has no legal move.
pub fn reply(board: &Board, config: &SearchConfig) -> EngineResult<SearchOutcome> {
    if let Some(winner) = board.winner() {
        return Err(EngineError::GameOver { winner });
    }
    let outcome = find_best_move(board, config);
    match outcome.best_move {
        Some(_) => Ok(outcome),
        None => Err(EngineError::GameOver {
            winner: board.turn().opponent(),
        }),
    }
}
