//! Error types for the Amazons engine
//!
//! Only the validated API layer and the notation parsers report errors. The
//! board and search hot paths treat misuse as a caller obligation.

use crate::types::{Move, Piece};
use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinates outside the 10x10 board
    #[error("Invalid square: ({col}, {row}) (must be 0-9)")]
    InvalidSquare { col: i32, row: i32 },

    /// Square notation could not be parsed
    #[error("Cannot parse square from {input:?}")]
    ParseSquare { input: String },

    /// Move notation could not be parsed
    #[error("Cannot parse move from {input:?}")]
    ParseMove { input: String },

    /// Move is not legal in the current position
    #[error("Illegal move {mv} for {turn}")]
    IllegalMove { mv: Move, turn: Piece },

    /// Undo requested with no moves on the history stack
    #[error("No moves to undo")]
    NothingToUndo,

    /// The side to move is immobilized
    #[error("Game is over: {winner} has won")]
    GameOver { winner: Piece },
}

impl EngineError {
    pub(crate) fn invalid_square(col: i32, row: i32) -> Self {
        EngineError::InvalidSquare { col, row }
    }

    pub(crate) fn illegal(mv: Move, turn: Piece) -> Self {
        EngineError::IllegalMove { mv, turn }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
