//! # Core Types - Pieces, Moves and Game State
//!
//! ## Piece Encoding
//!
//! A cell holds one of four values: empty, a white queen, a black queen, or a
//! spear. Spears never move and are never removed except by undo, so the set
//! of open cells shrinks by one every move. `White` and `Black` double as the
//! identity of a side, which keeps "whose turn" and "what is on this cell"
//! comparable with a single `==`.
//!
//! ## Moves
//!
//! A [`Move`] is a full turn: a queen slides from `from` to `to`, then throws a
//! spear from `to` onto `spear`. Moves are plain values; whether one is legal
//! depends on a board and is decided by [`crate::board::Board::is_legal`].

use crate::error::EngineError;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Contents of a cell, and identity of a side
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Spear,
}

impl Piece {
    /// The other side. Non-queen values map to themselves.
    #[inline]
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            other => other,
        }
    }

    /// Single-character form used by the board dump.
    pub const fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }

    #[inline]
    pub const fn is_queen(self) -> bool {
        matches!(self, Piece::White | Piece::Black)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Empty => "empty",
            Piece::White => "white",
            Piece::Black => "black",
            Piece::Spear => "spear",
        };
        f.write_str(name)
    }
}

/// One full turn: queen move plus spear throw
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, spear: Square) -> Self {
        Move { from, to, spear }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn spear(self) -> Square {
        self.spear
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

/// Parses `d1-d7(g7)` or whitespace separated `d1 d7 g7`.
impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EngineError::ParseMove {
            input: s.to_string(),
        };
        let parts: Vec<&str> = if s.contains('-') {
            let (from, rest) = s.trim().split_once('-').ok_or_else(err)?;
            let (to, spear) = rest.split_once('(').ok_or_else(err)?;
            let spear = spear.strip_suffix(')').ok_or_else(err)?;
            vec![from, to, spear]
        } else {
            s.split_whitespace().collect()
        };
        match parts.as_slice() {
            [from, to, spear] => Ok(Move::new(
                from.parse().map_err(|_| err())?,
                to.parse().map_err(|_| err())?,
                spear.parse().map_err(|_| err())?,
            )),
            _ => Err(err()),
        }
    }
}

/// Outcome of a position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// `turn` has at least one legal move
    Playing { turn: Piece },
    /// The side to move is immobilized and `winner` is its opponent
    Won { winner: Piece },
}
