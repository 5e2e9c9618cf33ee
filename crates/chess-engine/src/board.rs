//! Piece placement on an 8x8 grid.

use chess_core::{Color, Coordinate, Piece, PieceKind, BOARD_SIZE};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Back rank layout, from the a-file to the h-file.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The board: one optional piece per square.
///
/// A plain array, so `Clone` is a full independent copy. Speculative move
/// simulation relies on this.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_rank() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, sq: Coordinate) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Puts a piece on a square, replacing any occupant.
    #[inline]
    pub fn place(&mut self, sq: Coordinate, piece: Piece) {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Clears a square, returning what stood there.
    #[inline]
    pub fn remove(&mut self, sq: Coordinate) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// Returns the piece that was on `to`, if any.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let moving = self.remove(from);
        let captured = self.remove(to);
        if let Some(piece) = moving {
            self.place(to, piece);
        }
        captured
    }

    /// Returns true if the signed (row, col) pair lies on the board.
    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        chess_core::in_bounds(row, col)
    }

    #[inline]
    pub fn is_empty(&self, sq: Coordinate) -> bool {
        self.get(sq).is_none()
    }

    #[inline]
    pub fn has_piece_of_color(&self, sq: Coordinate, color: Color) -> bool {
        matches!(self.get(sq), Some(piece) if piece.color == color)
    }

    /// Locates the king of the given color by scanning the board.
    ///
    /// Returns `None` on partial boards without that king.
    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King) && piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}

/// Renders rank 8 at the top, one character per square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = cell.map(Piece::to_char).unwrap_or('.');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(board.get(sq(7, 4)), Some(Piece::white(PieceKind::King)));
        assert_eq!(board.get(sq(0, 3)), Some(Piece::black(PieceKind::Queen)));
        assert_eq!(board.get(sq(6, 0)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(board.get(sq(1, 7)), Some(Piece::black(PieceKind::Pawn)));
        assert!(board.is_empty(sq(4, 4)));
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn starting_display() {
        let expected = "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n";
        assert_eq!(Board::starting().to_string(), expected);
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Piece::black(PieceKind::Knight));
        assert!(board.has_piece_of_color(sq(3, 3), Color::Black));
        assert!(!board.has_piece_of_color(sq(3, 3), Color::White));
        assert_eq!(board.remove(sq(3, 3)), Some(Piece::black(PieceKind::Knight)));
        assert!(board.is_empty(sq(3, 3)));
        assert_eq!(board.remove(sq(3, 3)), None);
    }

    #[test]
    fn move_piece_overwrites_destination() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::white(PieceKind::Rook));
        board.place(sq(4, 7), Piece::black(PieceKind::Bishop));

        let captured = board.move_piece(sq(4, 4), sq(4, 7));

        assert_eq!(captured, Some(Piece::black(PieceKind::Bishop)));
        assert_eq!(board.get(sq(4, 7)), Some(Piece::white(PieceKind::Rook)));
        assert!(board.is_empty(sq(4, 4)));
    }

    #[test]
    fn find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), Some(sq(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn bounds() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(7, 7));
        assert!(!Board::in_bounds(-1, 3));
        assert!(!Board::in_bounds(3, 8));
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::starting();
        let mut copy = original.clone();
        copy.move_piece(sq(6, 4), sq(4, 4));
        assert!(original.is_empty(sq(4, 4)));
        assert!(copy.is_empty(sq(6, 4)));
        assert_ne!(original, copy);
    }
}
