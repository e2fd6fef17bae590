//! Static position evaluation
//!
//! Scores are from White's point of view. A decided board scores
//! `±WINNING_VALUE`; otherwise the score is the mobility difference, the
//! number of legal moves White has minus the number Black has.

use crate::board::Board;
use crate::constants::WINNING_VALUE;
use crate::types::Piece;

/// Heuristic value of `board`.
pub fn evaluate_position(board: &Board) -> i32 {
    match board.winner() {
        Some(Piece::White) => WINNING_VALUE,
        Some(_) => -WINNING_VALUE,
        None => mobility(board, Piece::White) - mobility(board, Piece::Black),
    }
}

/// Number of legal moves available to `side`.
pub fn mobility(board: &Board, side: Piece) -> i32 {
    board.legal_moves(side).count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row)
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(0, evaluate_position(&Board::new()));
    }

    #[test]
    fn test_mobility_difference() {
        let mut board = Board::empty();
        board.put(Piece::White, sq(0, 0));
        board.put(Piece::Black, sq(9, 9));
        for row in 0..10 {
            board.put(Piece::Spear, sq(2, row));
        }
        board.put(Piece::Spear, sq(1, 2));
        board.put(Piece::Spear, sq(0, 2));
        // White is boxed into a1, a2, b1, b2.
        let white = mobility(&board, Piece::White);
        let black = mobility(&board, Piece::Black);
        assert!(white > 0 && black > white);
        assert_eq!(white - black, evaluate_position(&board));
    }

    #[test]
    fn test_decided_positions() {
        let mut board = Board::empty();
        board.put(Piece::White, sq(0, 0));
        board.put(Piece::Spear, sq(0, 1));
        board.put(Piece::Spear, sq(1, 1));
        board.put(Piece::Spear, sq(1, 0));
        board.put(Piece::Black, sq(9, 9));
        assert_eq!(-WINNING_VALUE, evaluate_position(&board));

        board.set_turn(Piece::Black);
        board.put(Piece::White, sq(5, 5));
        board.put(Piece::Spear, sq(9, 8));
        board.put(Piece::Spear, sq(8, 8));
        board.put(Piece::Spear, sq(8, 9));
        assert_eq!(WINNING_VALUE, evaluate_position(&board));
    }
}
