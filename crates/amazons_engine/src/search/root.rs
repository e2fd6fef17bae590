//! Search entry point
//!
//! Clones the caller's board, picks the depth from the game phase, runs the
//! alpha-beta search for the side to move and reports what it found.

use super::alphabeta::{Searcher, Sense};
use super::depth::SearchConfig;
use crate::board::Board;
use crate::constants::INFTY;
use crate::types::Move;
use instant::Instant;
use std::time::Duration;
use tracing::debug;

/// Counters collected during one search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included.
    pub nodes: u64,
    /// Times a node stopped early because alpha met beta.
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Result of [`find_best_move`]
#[derive(Copy, Clone, Debug)]
pub struct SearchOutcome {
    /// `None` only when the side to move had no legal move.
    pub best_move: Option<Move>,
    /// Minimax value of the position, from White's point of view.
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Best move for the side to move on `board`.
///
/// The board should still be in play (`board.winner()` is `None`); on a
/// decided board the outcome carries no move.
pub fn find_best_move(board: &Board, config: &SearchConfig) -> SearchOutcome {
    let start = Instant::now();
    let depth = config.depth_for(board);
    let mut scratch = board.clone();
    let mut searcher = Searcher::default();

    let score = searcher.alphabeta(
        &mut scratch,
        depth,
        true,
        Sense::for_side(board.turn()),
        -INFTY,
        INFTY,
    );
    debug_assert!(scratch == *board, "search left moves applied");

    let mut stats = searcher.stats;
    stats.elapsed = start.elapsed();
    debug!(
        "[SEARCH] {} depth={} score={} best={:?} nodes={} cutoffs={} elapsed={:?}",
        board.turn(),
        depth,
        score,
        searcher.best_move.map(|mv| mv.to_string()),
        stats.nodes,
        stats.cutoffs,
        stats.elapsed
    );

    SearchOutcome {
        best_move: searcher.best_move,
        score,
        depth,
        stats,
    }
}
