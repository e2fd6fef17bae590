//! Search depth policy

use crate::board::Board;
use crate::constants::DEFAULT_DEPTH_INTERVAL;

/// Tunable parameters of the search
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// One extra ply for every `depth_interval` moves played. Must be non-zero.
    pub depth_interval: u32,
    /// Searches exactly this many plies, ignoring the game phase.
    pub fixed_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_interval: DEFAULT_DEPTH_INTERVAL,
            fixed_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn with_fixed_depth(depth: u32) -> Self {
        SearchConfig {
            fixed_depth: Some(depth),
            ..Self::default()
        }
    }

    /// `1 + num_moves / depth_interval`, unless a fixed depth is set.
    ///
    /// Never below 1, so the root always looks at its moves.
    pub fn depth_for_moves(&self, num_moves: usize) -> u32 {
        match self.fixed_depth {
            Some(depth) => depth.max(1),
            None => 1 + num_moves as u32 / self.depth_interval.max(1),
        }
    }

    pub fn depth_for(&self, board: &Board) -> u32 {
        self.depth_for_moves(board.num_moves())
    }
}
