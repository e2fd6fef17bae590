//! Move execution and validation

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::Move;

/// True iff `mv` is legal for the side to move
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    board.is_legal_move(mv)
}

/// Execute a move on the board
///
/// # Errors
///
/// - [`EngineError::GameOver`] if the side to move is already immobilized
/// - [`EngineError::IllegalMove`] if `mv` is not legal in this position
///
/// The board is unchanged when an error is returned.
pub fn do_move(board: &mut Board, mv: Move) -> EngineResult<()> {
    if let Some(winner) = board.winner() {
        return Err(EngineError::GameOver { winner });
    }
    if !board.is_legal_move(mv) {
        return Err(EngineError::illegal(mv, board.turn()));
    }
    board.make_move(mv);
    Ok(())
}

/// Take back the last move and return it
///
/// # Errors
///
/// [`EngineError::NothingToUndo`] on a board with no history.
pub fn undo_move(board: &mut Board) -> EngineResult<Move> {
    board.undo().ok_or(EngineError::NothingToUndo)
}
