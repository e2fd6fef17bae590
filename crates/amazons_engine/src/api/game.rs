//! Game lifecycle management

use crate::board::Board;

/// Create a new game in the initial position
pub fn new_game() -> Board {
    Board::new()
}

/// Reset the game to the initial position, discarding its history
pub fn reset_game(board: &mut Board) {
    board.init();
}
