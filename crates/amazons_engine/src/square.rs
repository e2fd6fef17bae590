//! Square identity and queen-move geometry
//!
//! A [`Square`] is a plain `(col, row)` value on the 10x10 board. Columns are
//! written `a`-`j` and rows `1`-`10`, so `Square::new(3, 0)` prints as `d1`.
//!
//! Geometry follows the direction numbering in [`crate::constants`]:
//! `direction` maps a pair of colinear squares to an index, and `queen_move`
//! walks from a square along an index.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use std::fmt;
use std::str::FromStr;

/// A position on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Square at (`col`, `row`). Both must be below [`SIZE`].
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        debug_assert!((col as usize) < SIZE && (row as usize) < SIZE);
        Square { col, row }
    }

    /// Checked constructor for coordinates that may be off the board.
    pub fn try_new(col: i32, row: i32) -> EngineResult<Self> {
        if in_bounds(col, row) {
            Ok(Square::new(col as u8, row as u8))
        } else {
            Err(EngineError::invalid_square(col, row))
        }
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Linear index in column-major order (0-99).
    #[inline]
    pub const fn index(self) -> usize {
        self.col as usize * SIZE + self.row as usize
    }

    /// Inverse of [`Square::index`].
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Square::new((index / SIZE) as u8, (index % SIZE) as u8)
    }

    /// Every square, column by column.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }

    /// Direction index (0-7) of the straight line from `self` to `other`.
    ///
    /// Only meaningful when `other.is_queen_move(self)`; other inputs are a
    /// caller error and produce an arbitrary direction in release builds.
    pub fn direction(self, other: Square) -> usize {
        debug_assert!(self.is_queen_move(other), "{self} -> {other} is not a queen move");
        let dcol = (other.col as i8 - self.col as i8).signum();
        let drow = (other.row as i8 - self.row as i8).signum();
        DIRECTION_DELTAS
            .iter()
            .position(|&delta| delta == (dcol, drow))
            .unwrap_or(0)
    }

    /// The square `steps` squares away in direction `dir`, or `None` if that
    /// falls off the board.
    #[inline]
    pub fn queen_move(self, dir: usize, steps: usize) -> Option<Square> {
        let (dcol, drow) = DIRECTION_DELTAS[dir];
        let col = self.col as i32 + dcol as i32 * steps as i32;
        let row = self.row as i32 + drow as i32 * steps as i32;
        Square::try_new(col, row).ok()
    }

    /// True iff `other` is a different square on the same row, column or diagonal.
    pub fn is_queen_move(self, other: Square) -> bool {
        if self == other {
            return false;
        }
        let dcol = (other.col as i32 - self.col as i32).abs();
        let drow = (other.row as i32 - self.row as i32).abs();
        dcol == 0 || drow == 0 || dcol == drow
    }
}

#[inline]
fn in_bounds(col: i32, row: i32) -> bool {
    (0..SIZE as i32).contains(&col) && (0..SIZE as i32).contains(&row)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EngineError::ParseSquare {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or_else(err)?;
        if !('a'..='j').contains(&col_char) {
            return Err(err());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let row: u8 = digits.parse().map_err(|_| err())?;
        if row == 0 || row as usize > SIZE {
            return Err(err());
        }
        Ok(Square::new(col_char as u8 - b'a', row - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row)
    }

    #[test]
    fn test_queen_move() {
        assert_eq!(Some(sq(3, 5)), sq(3, 3).queen_move(0, 2));
        assert_eq!(Some(sq(6, 6)), sq(3, 3).queen_move(1, 3));
        assert_eq!(Some(sq(6, 3)), sq(3, 3).queen_move(2, 3));
        assert_eq!(Some(sq(0, 6)), sq(3, 3).queen_move(7, 3));
    }

    #[test]
    fn test_queen_move_off_board() {
        assert_eq!(None, sq(0, 0).queen_move(4, 1));
        assert_eq!(None, sq(0, 0).queen_move(6, 1));
        assert_eq!(None, sq(9, 9).queen_move(1, 1));
        assert_eq!(None, sq(5, 5).queen_move(0, 5));
        assert_eq!(Some(sq(5, 9)), sq(5, 5).queen_move(0, 4));
    }

    #[test]
    fn test_direction() {
        let center = sq(3, 3);
        assert_eq!(0, center.direction(sq(3, 6)));
        assert_eq!(1, center.direction(sq(5, 5)));
        assert_eq!(2, center.direction(sq(4, 3)));
        assert_eq!(3, center.direction(sq(4, 2)));
        assert_eq!(4, center.direction(sq(3, 1)));
        assert_eq!(5, center.direction(sq(1, 1)));
        assert_eq!(6, center.direction(sq(1, 3)));
        assert_eq!(7, center.direction(sq(2, 4)));
    }

    #[test]
    fn test_direction_agrees_with_queen_move() {
        for from in Square::all() {
            for dir in 0..NUM_DIRECTIONS {
                for steps in 1..SIZE {
                    if let Some(to) = from.queen_move(dir, steps) {
                        assert_eq!(dir, from.direction(to), "{from} -> {to}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_queen_move() {
        assert!(!sq(1, 5).is_queen_move(sq(1, 5)));
        assert!(!sq(1, 5).is_queen_move(sq(2, 7)));
        assert!(!sq(0, 0).is_queen_move(sq(5, 1)));
        assert!(sq(1, 1).is_queen_move(sq(9, 9)));
        assert!(sq(2, 7).is_queen_move(sq(8, 7)));
        assert!(sq(3, 0).is_queen_move(sq(3, 4)));
        assert!(sq(7, 9).is_queen_move(sq(0, 2)));
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Ok(sq(9, 0)), Square::try_new(9, 0));
        assert_eq!(
            Err(EngineError::InvalidSquare { col: 10, row: 0 }),
            Square::try_new(10, 0)
        );
        assert!(Square::try_new(0, -1).is_err());
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(NUM_SQUARES, Square::all().count());
        assert_eq!(sq(0, 9), Square::from_index(9));
        assert_eq!(sq(1, 0), Square::from_index(10));
        assert_eq!(37, sq(3, 7).index());
    }

    #[test]
    fn test_notation() {
        assert_eq!("d1", sq(3, 0).to_string());
        assert_eq!("a10", sq(0, 9).to_string());
        assert_eq!(Ok(sq(9, 9)), "j10".parse());
        assert_eq!(Ok(sq(6, 6)), "g7".parse());
    }

    #[test]
    fn test_bad_notation() {
        for bad in ["", "k1", "a0", "a11", "a", "1a", "d-1", "a+1", "b 2"] {
            assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
        }
    }
}
