//! Alpha-beta minimax
//!
//! White maximizes and Black minimizes over [`evaluate_position`]. Each call
//! walks the side's moves with a [`LegalMoveCursor`], applies one under a
//! [`MoveGuard`], recurses, and lets the guard undo it before the bounds are
//! compared, so a cutoff returns with the board already restored.

use super::make_unmake::MoveGuard;
use super::root::SearchStats;
use crate::board::Board;
use crate::evaluation::evaluate_position;
use crate::move_gen::LegalMoveCursor;
use crate::types::{Move, Piece};

/// Which bound a node moves
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Sense {
    /// White to move; raises alpha
    Maximize,
    /// Black to move; lowers beta
    Minimize,
}

impl Sense {
    pub(crate) fn for_side(side: Piece) -> Self {
        if side == Piece::White {
            Sense::Maximize
        } else {
            Sense::Minimize
        }
    }

    fn side(self) -> Piece {
        match self {
            Sense::Maximize => Piece::White,
            Sense::Minimize => Piece::Black,
        }
    }

    fn flip(self) -> Self {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }
}

/// Recursion state shared across one search
#[derive(Default)]
pub(crate) struct Searcher {
    pub stats: SearchStats,
    /// Move that last moved the root bound.
    pub best_move: Option<Move>,
}

impl Searcher {
    /// Value of `board` searched `depth` plies deep within (`alpha`, `beta`).
    ///
    /// Records the move that improves the bound in `best_move` iff
    /// `save_move`, which only the root call sets. `board` is returned in
    /// the state it was passed in.
    pub fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        save_move: bool,
        sense: Sense,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            return evaluate_position(board);
        }

        let mut moves = LegalMoveCursor::new(sense.side());
        while let Some(mv) = moves.advance(board) {
            let score = {
                let mut child = MoveGuard::apply(board, mv);
                self.alphabeta(&mut child, depth - 1, false, sense.flip(), alpha, beta)
            };

            let improved = match sense {
                Sense::Maximize if score > alpha => {
                    alpha = score;
                    true
                }
                Sense::Minimize if score < beta => {
                    beta = score;
                    true
                }
                _ => false,
            };
            if save_move && improved {
                self.best_move = Some(mv);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                if save_move {
                    self.best_move = Some(mv);
                }
                break;
            }
        }

        match sense {
            Sense::Maximize => alpha,
            Sense::Minimize => beta,
        }
    }
}
