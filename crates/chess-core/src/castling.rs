//! Castling wing geometry.

use crate::{Color, Coordinate};

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;

/// The two wings a king may castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingSide {
    King = 0,
    Queen = 1,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::King, CastlingSide::Queen];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column the wing's rook starts on.
    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastlingSide::King => 7,
            CastlingSide::Queen => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastlingSide::King => 6,
            CastlingSide::Queen => 2,
        }
    }

    /// Column the king skips over, which is where the rook lands.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastlingSide::King => 5,
            CastlingSide::Queen => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty to castle.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastlingSide::King => &[5, 6],
            CastlingSide::Queen => &[1, 2, 3],
        }
    }

    /// Returns the wing a king move lands on, if it is a two-column king step.
    #[inline]
    pub const fn from_king_target(col: u8) -> Option<Self> {
        match col {
            6 => Some(CastlingSide::King),
            2 => Some(CastlingSide::Queen),
            _ => None,
        }
    }

    /// Returns the wing whose rook starts on `sq` for `color`.
    pub fn from_rook_home(color: Color, sq: Coordinate) -> Option<Self> {
        if sq.row() != color.back_rank() {
            return None;
        }
        CastlingSide::ALL
            .into_iter()
            .find(|side| side.rook_home_col() == sq.col())
    }

    /// Square the king starts on.
    #[inline]
    pub fn king_home(color: Color) -> Coordinate {
        back_rank_square(color, KING_HOME_COL)
    }

    #[inline]
    pub fn rook_home(self, color: Color) -> Coordinate {
        back_rank_square(color, self.rook_home_col())
    }

    #[inline]
    pub fn king_target(self, color: Color) -> Coordinate {
        back_rank_square(color, self.king_target_col())
    }

    #[inline]
    pub fn rook_target(self, color: Color) -> Coordinate {
        back_rank_square(color, self.rook_target_col())
    }
}

fn back_rank_square(color: Color, col: u8) -> Coordinate {
    match Coordinate::new(color.back_rank(), col) {
        Some(sq) => sq,
        None => unreachable!("back rank columns are always on the board"),
    }
}
