//! Move making and unmaking for search
//!
//! [`MoveGuard`] applies a move when created and takes it back when dropped.
//! While it lives it stands in for the board (`Deref`/`DerefMut`), so the
//! child search runs on the guarded position and the parent gets its board
//! back, unchanged, as soon as the guard goes out of scope.

use crate::board::Board;
use crate::types::Move;
use std::ops::{Deref, DerefMut};

/// A move applied for the lifetime of the guard
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> MoveGuard<'a> {
    /// Applies `mv` to `board`. The move must be legal.
    pub fn apply(board: &'a mut Board, mv: Move) -> Self {
        board.make_move(mv);
        MoveGuard { board, mv }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let undone = self.board.undo();
        debug_assert_eq!(Some(self.mv), undone, "unbalanced make/undo under guard");
    }
}
