//! Alpha-beta game-tree search
//!
//! This module picks the computer's move:
//! - Fail-hard alpha-beta minimax, White maximizing and Black minimizing
//! - Depth grows with the number of moves played, since spears shrink the
//!   branching factor as the game goes on
//! - Mobility difference as the static evaluation
//!
//! The search is synchronous and recursive, so stack depth equals search
//! depth. Every invocation clones the caller's board once and works only on
//! that copy; moves are applied and taken back through [`MoveGuard`], whose
//! `Drop` performs the undo, so no return path can leave a move applied.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta recursion
//! - `make_unmake` - Scoped move application
//! - `depth` - Depth policy and search configuration
//! - `root` - Entry point, statistics and logging

mod alphabeta;
mod depth;
mod make_unmake;
mod root;

pub use depth::SearchConfig;
pub use make_unmake::MoveGuard;
pub use root::{find_best_move, SearchOutcome, SearchStats};
