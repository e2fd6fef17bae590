//! Full legal moves for one side
//!
//! Three nested walks: origins holding the side's queens, destinations
//! reachable from the origin, and spear squares reachable from the
//! destination with the vacated origin counted as empty.

use super::reachable::ReachableCursor;
use crate::board::Board;
use crate::constants::NUM_SQUARES;
use crate::square::Square;
use crate::types::{Move, Piece};

/// Resumable enumeration of every legal move for `side`
#[derive(Copy, Clone, Debug)]
pub struct LegalMoveCursor {
    side: Piece,
    /// Index of the next square to examine as an origin.
    next_origin: usize,
    destinations: Option<ReachableCursor>,
    /// Origin, destination and the spear walk from that destination.
    spears: Option<(Square, Square, ReachableCursor)>,
}

impl LegalMoveCursor {
    pub fn new(side: Piece) -> Self {
        LegalMoveCursor {
            side,
            next_origin: 0,
            destinations: None,
            spears: None,
        }
    }

    /// Next legal move on `board`, or `None` when there are no more.
    ///
    /// `board` must be in the same position on every call; the search
    /// guarantees this by undoing each move before advancing again.
    pub fn advance(&mut self, board: &Board) -> Option<Move> {
        loop {
            if let Some((from, to, spears)) = self.spears.as_mut() {
                if let Some(spear) = spears.advance(board) {
                    return Some(Move::new(*from, *to, spear));
                }
                self.spears = None;
            }

            if let Some(dests) = self.destinations.as_mut() {
                if let Some(to) = dests.advance(board) {
                    let from = dests.origin();
                    self.spears = Some((from, to, ReachableCursor::new(to, Some(from))));
                    continue;
                }
                self.destinations = None;
            }

            let origin = self.next_queen(board)?;
            self.destinations = Some(ReachableCursor::new(origin, None));
        }
    }

    fn next_queen(&mut self, board: &Board) -> Option<Square> {
        while self.next_origin < NUM_SQUARES {
            let sq = Square::from_index(self.next_origin);
            self.next_origin += 1;
            if board.get(sq) == self.side {
                return Some(sq);
            }
        }
        None
    }
}

/// Iterator returned by [`Board::legal_moves`]
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    cursor: LegalMoveCursor,
}

impl<'a> LegalMoves<'a> {
    pub(crate) fn new(board: &'a Board, side: Piece) -> Self {
        LegalMoves {
            board,
            cursor: LegalMoveCursor::new(side),
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    #[inline]
    fn next(&mut self) -> Option<Move> {
        self.cursor.advance(self.board)
    }
}

impl std::iter::FusedIterator for LegalMoves<'_> {}
