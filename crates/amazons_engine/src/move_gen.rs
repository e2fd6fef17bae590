//! Lazy move generation
//!
//! Moves are never collected into lists. Each generator is a small cursor
//! that remembers where it is (direction and distance for a single queen;
//! origin, destination and spear sub-cursors for full moves) and produces
//! the next item only when asked.
//!
//! ## Cursors and iterators
//!
//! A cursor does not borrow the board; it is handed `&Board` on every
//! `advance`. That lets the search apply a move, recurse, undo it, and then
//! continue the same enumeration. Callers that only read the board use the
//! borrowing [`Iterator`] adapters instead.
//!
//! ## Order
//!
//! Origins are scanned column by column, directions in index order (see
//! [`crate::constants`]) and distances outward from 1. The order is fixed, so
//! identical positions always enumerate identical sequences.
//!
//! ## Module Organization
//!
//! - `reachable` - squares reachable by one queen move
//! - `legal` - full (from, to, spear) moves for a side

mod legal;
mod reachable;

pub use legal::{LegalMoveCursor, LegalMoves};
pub use reachable::{ReachableCursor, ReachableFrom};
