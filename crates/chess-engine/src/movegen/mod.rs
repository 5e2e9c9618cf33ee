//! Move generation.
//!
//! Pieces produce pseudo-legal moves from the board and game state. Legal
//! moves are the pseudo-legal ones that survive a simulated play on a copy of
//! the board without leaving the mover's king attacked.

mod castling;
pub mod perft;
mod pieces;

use crate::{Board, GameState};
use chess_core::{CastlingSide, Color, Coordinate, Move, Piece, PieceKind};
use tracing::trace;

pub use castling::can_castle;

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves the list can hold.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Returns true if some move in the list lands on `sq`.
    #[inline]
    pub fn reaches(&self, sq: Coordinate) -> bool {
        self.iter().any(|m| m.to == sq)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Appends the pseudo-legal moves of `piece` standing on `from`.
///
/// Pseudo-legal moves follow the piece's movement pattern and board
/// occupancy but may leave the mover's own king attacked.
pub fn pseudo_legal_moves(
    piece: Piece,
    from: Coordinate,
    board: &Board,
    state: &GameState,
    moves: &mut MoveList,
) {
    match piece.kind {
        PieceKind::Pawn => pieces::pawn_moves(piece.color, from, board, state, moves),
        PieceKind::Knight => pieces::knight_moves(piece.color, from, board, moves),
        PieceKind::Bishop => pieces::bishop_moves(piece.color, from, board, moves),
        PieceKind::Rook => pieces::rook_moves(piece.color, from, board, moves),
        PieceKind::Queen => pieces::queen_moves(piece.color, from, board, moves),
        PieceKind::King => {
            pieces::king_steps(piece.color, from, board, moves);
            castling::castling_moves(piece.color, from, board, state, moves);
        }
    }
}

/// Returns true if any piece of `by_color` attacks `sq`.
///
/// Moves are generated under [`GameState::special_moves_suppressed`], so
/// castling and en passant never count as attacks. Pawns attack their two
/// forward diagonals whether or not anything stands there; their pushes are
/// not attacks. This only matters for empty squares, which in practice means
/// the squares a castling king crosses or lands on.
pub fn is_square_attacked(board: &Board, state: &GameState, sq: Coordinate, by_color: Color) -> bool {
    let quiet = state.special_moves_suppressed();
    let mut scratch = MoveList::new();

    board.pieces_of(by_color).any(|(from, piece)| {
        if piece.is(PieceKind::Pawn) {
            return pieces::pawn_attacks(by_color, from).contains(&Some(sq));
        }
        scratch.clear();
        pseudo_legal_moves(piece, from, board, &quiet, &mut scratch);
        scratch.reaches(sq)
    })
}

/// Returns true if the king of the given color is attacked.
///
/// A board without that king is never in check.
pub fn is_in_check(board: &Board, state: &GameState, king_color: Color) -> bool {
    match board.find_king(king_color) {
        Some(king_sq) => is_square_attacked(board, state, king_sq, king_color.opposite()),
        None => false,
    }
}

/// What a played move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffects {
    /// The piece that moved.
    pub piece: Piece,
    /// The piece removed from the board, including an en passant victim.
    pub captured: Option<Piece>,
    /// Set when the move was an en passant capture.
    pub en_passant: bool,
    /// The wing castled toward, if the move was castling.
    pub castling: Option<CastlingSide>,
    /// Set when a pawn reached the last rank.
    pub promotes: bool,
}

/// Plays a move on the given board and state without checking legality.
///
/// Relocates the piece, performs the en passant and castling side effects,
/// updates the en passant target, castling rights and pending promotion, and
/// passes the turn. Returns `None` and changes nothing if `m.from` is empty.
pub fn make_move(board: &mut Board, state: &mut GameState, m: Move) -> Option<MoveEffects> {
    let piece = board.get(m.from)?;
    let us = piece.color;
    let them = us.opposite();

    let mut captured = board.move_piece(m.from, m.to);

    let en_passant = piece.is(PieceKind::Pawn)
        && state.en_passant == Some(m.to)
        && m.col_distance() == 1
        && captured.is_none();
    if en_passant {
        if let Some(victim) = m.to.offset(-us.pawn_direction(), 0) {
            captured = board.remove(victim);
        }
    }

    let castling = if piece.is(PieceKind::King) && m.col_distance() == 2 {
        CastlingSide::from_king_target(m.to.col())
    } else {
        None
    };
    if let Some(side) = castling {
        board.move_piece(side.rook_home(us), side.rook_target(us));
    }

    state.en_passant = if piece.is(PieceKind::Pawn) && m.row_distance() == 2 {
        m.from.offset(us.pawn_direction(), 0)
    } else {
        None
    };

    if piece.is(PieceKind::King) {
        state.castling.revoke_color(us);
    }
    if piece.is(PieceKind::Rook) {
        if let Some(side) = CastlingSide::from_rook_home(us, m.from) {
            state.castling.revoke(us, side);
        }
    }
    // A piece landing on a rook's home square has captured that rook.
    if let Some(side) = CastlingSide::from_rook_home(them, m.to) {
        state.castling.revoke(them, side);
    }

    let promotes = piece.is(PieceKind::Pawn) && m.to.row() == us.promotion_rank();
    if promotes {
        state.pending_promotion = Some(m.to);
    }

    state.side_to_move = state.side_to_move.opposite();

    Some(MoveEffects {
        piece,
        captured,
        en_passant,
        castling,
        promotes,
    })
}

/// Returns true if playing `m` leaves the king of `color` unattacked.
///
/// The move is played on copies; `board` and `state` are untouched.
fn leaves_king_safe(board: &Board, state: &GameState, m: Move, color: Color) -> bool {
    let mut board = board.clone();
    let mut state = *state;
    make_move(&mut board, &mut state, m);
    !is_in_check(&board, &state, color)
}

/// Generates the legal moves of the piece on `from`, whoever's turn it is.
///
/// An empty square yields no moves.
pub fn legal_moves_from(board: &Board, state: &GameState, from: Coordinate) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    pseudo_legal_moves(piece, from, board, state, &mut moves);
    let pseudo_count = moves.len();
    moves.retain(|m| leaves_king_safe(board, state, *m, piece.color));
    trace!(
        %from,
        piece = %piece,
        pseudo = pseudo_count,
        legal = moves.len(),
        "filtered moves"
    );

    moves
}

/// Generates all legal moves for the side to move.
pub fn generate_moves(board: &Board, state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces_of(state.side_to_move) {
        for m in &legal_moves_from(board, state, from) {
            moves.push(*m);
        }
    }
    moves
}

/// Returns true if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board, state: &GameState) -> bool {
    board
        .pieces_of(state.side_to_move)
        .any(|(from, _)| !legal_moves_from(board, state, from).is_empty())
}
