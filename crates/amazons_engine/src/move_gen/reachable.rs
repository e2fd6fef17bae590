//! Squares reachable by a single unblocked queen move

use crate::board::Board;
use crate::constants::NUM_DIRECTIONS;
use crate::square::Square;
use crate::types::Piece;

/// Resumable walk over the squares reachable from one origin
///
/// Walks each direction outward until the edge or the first occupied
/// square, then turns to the next direction. `as_empty` never blocks.
#[derive(Copy, Clone, Debug)]
pub struct ReachableCursor {
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: usize,
}

impl ReachableCursor {
    pub fn new(from: Square, as_empty: Option<Square>) -> Self {
        ReachableCursor {
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    pub fn origin(&self) -> Square {
        self.from
    }

    /// Rewinds to the first direction.
    pub fn restart(&mut self) {
        self.dir = 0;
        self.steps = 0;
    }

    /// Next reachable square on `board`, or `None` once every direction is
    /// exhausted.
    pub fn advance(&mut self, board: &Board) -> Option<Square> {
        while self.dir < NUM_DIRECTIONS {
            self.steps += 1;
            match self.from.queen_move(self.dir, self.steps) {
                Some(sq) if board.get(sq) == Piece::Empty || Some(sq) == self.as_empty => {
                    return Some(sq);
                }
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

/// Iterator returned by [`Board::reachable_from`]
#[derive(Clone, Debug)]
pub struct ReachableFrom<'a> {
    board: &'a Board,
    cursor: ReachableCursor,
}

impl<'a> ReachableFrom<'a> {
    pub(crate) fn new(board: &'a Board, from: Square, as_empty: Option<Square>) -> Self {
        ReachableFrom {
            board,
            cursor: ReachableCursor::new(from, as_empty),
        }
    }
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.cursor.advance(self.board)
    }
}

impl std::iter::FusedIterator for ReachableFrom<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row)
    }

    #[test]
    fn test_open_board_counts() {
        let board = Board::empty();
        // A corner sees its row, its column and one diagonal.
        assert_eq!(27, board.reachable_from(sq(0, 0), None).count());
        // A central square sees 9 + 9 + 9 + 8.
        assert_eq!(35, board.reachable_from(sq(4, 4), None).count());
    }

    #[test]
    fn test_order_is_direction_then_distance() {
        let mut board = Board::empty();
        for col in 0..10 {
            for row in 0..10 {
                board.put(Piece::Spear, sq(col, row));
            }
        }
        board.put(Piece::Empty, sq(5, 5));
        board.put(Piece::Empty, sq(5, 6));
        board.put(Piece::Empty, sq(5, 7));
        board.put(Piece::Empty, sq(6, 5));
        board.put(Piece::Empty, sq(4, 6));

        let squares: Vec<Square> = board.reachable_from(sq(5, 5), None).collect();
        assert_eq!(vec![sq(5, 6), sq(5, 7), sq(6, 5), sq(4, 6)], squares);
    }

    #[test]
    fn test_as_empty_is_passed_through() {
        let mut board = Board::empty();
        board.put(Piece::White, sq(0, 0));
        let blocked: HashSet<Square> = board.reachable_from(sq(0, 3), None).collect();
        let open: HashSet<Square> = board.reachable_from(sq(0, 3), Some(sq(0, 0))).collect();

        assert!(!blocked.contains(&sq(0, 0)));
        assert!(open.contains(&sq(0, 0)));
        assert_eq!(blocked.len() + 1, open.len());
    }

    #[test]
    fn test_cursor_restart_and_early_stop() {
        let board = Board::new();
        let mut cursor = ReachableCursor::new(sq(3, 0), None);
        let first = cursor.advance(&board);
        let second = cursor.advance(&board);
        assert_ne!(first, second);

        cursor.restart();
        assert_eq!(first, cursor.advance(&board));
        assert_eq!(sq(3, 0), cursor.origin());
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut board = Board::empty();
        board.put(Piece::White, sq(0, 0));
        board.put(Piece::Spear, sq(0, 1));
        board.put(Piece::Spear, sq(1, 1));
        board.put(Piece::Spear, sq(1, 0));

        let mut cursor = ReachableCursor::new(sq(0, 0), None);
        assert_eq!(None, cursor.advance(&board));
        assert_eq!(None, cursor.advance(&board));
    }
}
