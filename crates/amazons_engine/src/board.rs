//! Board state for a game of the Amazons
//!
//! The board owns the 10x10 grid, the side to move, and the stack of applied
//! moves that makes undo exact. It is the only mutable state in the engine:
//! the search clones it once per invocation and then works on that copy
//! through [`Board::make_move`] / [`Board::undo`].
//!
//! Mutators come in two flavours:
//! - `put`, `set_turn`: raw setup access with no rules attached.
//! - `make_move`, `undo`: game transitions. `make_move` trusts its caller to
//!   pass a legal move (see [`crate::api::do_move`] for the checked version).

use crate::constants::*;
use crate::move_gen::{LegalMoves, ReachableFrom};
use crate::square::Square;
use crate::types::{Move, Piece};
use std::cell::Cell;
use std::fmt;

/// Memoized result of [`Board::winner`], cleared on every mutation
#[derive(Copy, Clone, Debug)]
enum WinnerCache {
    Stale,
    Known(Option<Piece>),
}

/// The state of an Amazons game
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
    turn: Piece,
    history: Vec<Move>,
    winner: Cell<WinnerCache>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the initial position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.init();
        board
    }

    /// A board with no pieces at all and White to move. Used to build
    /// positions by hand with [`Board::put`].
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; NUM_SQUARES],
            turn: Piece::White,
            history: Vec::new(),
            winner: Cell::new(WinnerCache::Stale),
        }
    }

    /// Clears the board to the initial position.
    pub fn init(&mut self) {
        self.cells = [Piece::Empty; NUM_SQUARES];
        for &(col, row) in WHITE_START.iter() {
            self.cells[Square::new(col, row).index()] = Piece::White;
        }
        for &(col, row) in BLACK_START.iter() {
            self.cells[Square::new(col, row).index()] = Piece::Black;
        }
        self.turn = Piece::White;
        self.history.clear();
        self.invalidate();
    }

    /// Side whose move it is (White or Black).
    #[inline]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves applied and not undone.
    #[inline]
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Sets `sq` to `piece` with no legality checks.
    pub fn put(&mut self, piece: Piece, sq: Square) {
        self.cells[sq.index()] = piece;
        self.invalidate();
    }

    /// Overrides the side to move. Setup only; does not touch the history.
    pub fn set_turn(&mut self, side: Piece) {
        debug_assert!(side.is_queen());
        self.turn = side;
        self.invalidate();
    }

    /// True iff `from`-`to` is a queen move whose path is clear.
    ///
    /// Every square after `from` up to and including `to` must be empty,
    /// except `as_empty`, which counts as empty whatever it holds. The
    /// contents of `from` are ignored.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let dir = from.direction(to);
        let mut steps = 1;
        while let Some(sq) = from.queen_move(dir, steps) {
            if self.get(sq) != Piece::Empty && Some(sq) != as_empty {
                return false;
            }
            if sq == to {
                return true;
            }
            steps += 1;
        }
        false
    }

    /// True iff `from` holds a queen of the side to move.
    #[inline]
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from) == self.turn
    }

    /// True iff `from`-`to` is a valid queen move for the side to move,
    /// ignoring the spear.
    pub fn is_legal_to(&self, from: Square, to: Square) -> bool {
        self.is_legal_from(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from`-`to`(`spear`) is legal in the current position.
    pub fn is_legal(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_to(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to(), mv.spear())
    }

    /// Applies `mv`, which must be legal.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.get(mv.from());
        self.cells[mv.to().index()] = moved;
        self.cells[mv.from().index()] = Piece::Empty;
        self.cells[mv.spear().index()] = Piece::Spear;
        self.history.push(mv);
        self.turn = self.turn.opponent();
        self.invalidate();
    }

    /// Takes back the last move and returns it. Does nothing and returns
    /// `None` if no moves have been made.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.turn = self.turn.opponent();
        self.cells[last.to().index()] = Piece::Empty;
        self.cells[last.spear().index()] = Piece::Empty;
        // Last, since the spear may have landed back on the origin.
        self.cells[last.from().index()] = self.turn;
        self.invalidate();
        Some(last)
    }

    /// The winner, or `None` while the side to move still has a move.
    ///
    /// A side that cannot move loses, so the winner is always the opponent
    /// of [`Board::turn`].
    pub fn winner(&self) -> Option<Piece> {
        if let WinnerCache::Known(winner) = self.winner.get() {
            return winner;
        }
        let winner = if self.has_legal_move(self.turn) {
            None
        } else {
            Some(self.turn.opponent())
        };
        self.winner.set(WinnerCache::Known(winner));
        winner
    }

    /// True iff `side` has at least one legal move. Stops at the first one found.
    pub fn has_legal_move(&self, side: Piece) -> bool {
        self.legal_moves(side).next().is_some()
    }

    /// Squares reachable from `from` by an unblocked queen move, treating
    /// `as_empty` as empty. The piece on `from` and whose turn it is are
    /// not consulted.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom::new(self, from, as_empty)
    }

    /// All legal moves for `side`, regardless of whose turn it is.
    pub fn legal_moves(&self, side: Piece) -> LegalMoves<'_> {
        LegalMoves::new(self, side)
    }

    #[inline]
    fn invalidate(&self) {
        self.winner.set(WinnerCache::Stale);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.turn == other.turn && self.history == other.history
    }
}

impl Eq for Board {}

/// Rows from 10 down to 1, columns a to j.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE as u8).rev() {
            f.write_str("  ")?;
            for col in 0..SIZE as u8 {
                write!(f, " {}", self.get(Square::new(col, row)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
