//! Move representation.

use crate::Coordinate;
use std::fmt;

/// A chess move: the square a piece leaves and the square it lands on.
///
/// Special moves (castling, en passant, promotion) carry no extra data; the
/// engine infers them from the position when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Move {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Move { from, to }
    }

    /// Parses a move from two square names, e.g. "e2e4".
    pub fn from_squares(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Coordinate::from_algebraic(&s[0..2])?;
        let to = Coordinate::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Returns the row distance covered by the move.
    #[inline]
    pub const fn row_distance(self) -> u8 {
        self.from.row().abs_diff(self.to.row())
    }

    /// Returns the column distance covered by the move.
    #[inline]
    pub const fn col_distance(self) -> u8 {
        self.from.col().abs_diff(self.to.col())
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = match Coordinate::from_index(0) {
        Some(sq) => Move { from: sq, to: sq },
        None => unreachable!(),
    };
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn move_equality_by_value() {
        assert_eq!(Move::new(sq(6, 4), sq(4, 4)), Move::new(sq(6, 4), sq(4, 4)));
        assert_ne!(Move::new(sq(6, 4), sq(4, 4)), Move::new(sq(6, 4), sq(5, 4)));
    }

    #[test]
    fn move_from_squares() {
        let m = Move::from_squares("e2e4").unwrap();
        assert_eq!(m.from, sq(6, 4));
        assert_eq!(m.to, sq(4, 4));

        assert!(Move::from_squares("e2").is_none());
        assert!(Move::from_squares("e2e9").is_none());
        assert!(Move::from_squares("e2e4q").is_none());
    }

    #[test]
    fn move_distances() {
        let m = Move::new(sq(7, 4), sq(7, 6));
        assert_eq!(m.row_distance(), 0);
        assert_eq!(m.col_distance(), 2);
    }

    #[test]
    fn move_null() {
        assert_eq!(Move::NULL.from, Coordinate::new(0, 0).unwrap());
        assert_eq!(Move::NULL.to, Coordinate::new(0, 0).unwrap());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
