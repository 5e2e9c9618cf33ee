//! Board coordinate representation.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if the signed (row, col) pair lies on the board.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
/// Column 0 is the a-file. A `Coordinate` always lies on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a coordinate, or `None` if it is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coordinate { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from index (0-63, row-major).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Coordinate {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Parses a square name such as "e4".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Coordinate::new(b'8' - rank, file - b'a')
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the coordinate displaced by the given deltas, if still on the board.
    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Option<Self> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if in_bounds(row, col) {
            Some(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the coordinate seen from the other side of the board.
    #[inline]
    pub const fn rotated(self) -> Self {
        Coordinate {
            row: BOARD_SIZE - 1 - self.row,
            col: BOARD_SIZE - 1 - self.col,
        }
    }

    /// Returns the square name, e.g. "e4".
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, (b'8' - self.row) as char)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Coordinate::from_index)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
