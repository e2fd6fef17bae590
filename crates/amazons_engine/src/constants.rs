//! # Engine Constants - Board Geometry & Search Parameters
//!
//! Centralizes the fixed values used by the board, the move generator and the
//! alpha-beta search.
//!
//! ## Direction Vectors
//!
//! Queen moves run along one of eight compass directions, numbered clockwise
//! starting from "up the board" (increasing row):
//!
//! | index | name | (dcol, drow) |
//! |-------|------|--------------|
//! | 0     | N    | ( 0, +1)     |
//! | 1     | NE   | (+1, +1)     |
//! | 2     | E    | (+1,  0)     |
//! | 3     | SE   | (+1, -1)     |
//! | 4     | S    | ( 0, -1)     |
//! | 5     | SW   | (-1, -1)     |
//! | 6     | W    | (-1,  0)     |
//! | 7     | NW   | (-1, +1)     |
//!
//! Move enumeration walks these in index order, which fixes the order in
//! which the search sees moves and therefore its tie-breaking.
//!
//! ## Score Sentinels
//!
//! Scores are signed mobility differences, positive favouring White. A won
//! position is reported as `±WINNING_VALUE`, and the search window starts at
//! `±INFTY`, strictly outside every reachable score.

/// Number of squares on a side of the board.
pub const SIZE: usize = 10;

/// Total number of squares.
pub const NUM_SQUARES: usize = SIZE * SIZE;

/// Number of queen-move directions.
pub const NUM_DIRECTIONS: usize = 8;

/// Column/row deltas for each direction index.
pub const DIRECTION_DELTAS: [(i8, i8); NUM_DIRECTIONS] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Starting (col, row) of the four white queens.
pub const WHITE_START: [(u8, u8); 4] = [(0, 3), (3, 0), (6, 0), (9, 3)];

/// Starting (col, row) of the four black queens.
pub const BLACK_START: [(u8, u8); 4] = [(0, 6), (3, 9), (6, 9), (9, 6)];

/// A position magnitude indicating a win (for White if positive, Black if negative).
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// A magnitude greater than any score the evaluator produces.
pub const INFTY: i32 = i32::MAX;

/// Every this many moves played adds one ply to the search depth.
pub const DEFAULT_DEPTH_INTERVAL: u32 = 25;
