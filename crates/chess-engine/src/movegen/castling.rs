//! Castling candidate generation.

use super::{is_square_attacked, MoveList};
use crate::{Board, GameState};
use chess_core::{CastlingSide, Color, Coordinate, Move, Piece, PieceKind, KING_HOME_COL};

/// Returns true if `color` may castle toward `side` in this position.
///
/// Requires the right to be held, the king and rook on their home squares,
/// the squares between them empty, and none of the king's start, transit and
/// destination squares attacked.
pub fn can_castle(board: &Board, state: &GameState, color: Color, side: CastlingSide) -> bool {
    if !state.castling.has(color, side) {
        return false;
    }

    let king_home = CastlingSide::king_home(color);
    if board.get(king_home) != Some(Piece::new(PieceKind::King, color))
        || board.get(side.rook_home(color)) != Some(Piece::new(PieceKind::Rook, color))
    {
        return false;
    }

    let row = color.back_rank();
    let path_clear = side
        .between_cols()
        .iter()
        .filter_map(|&col| Coordinate::new(row, col))
        .all(|sq| board.is_empty(sq));
    if !path_clear {
        return false;
    }

    let them = color.opposite();
    [KING_HOME_COL, side.rook_target_col(), side.king_target_col()]
        .into_iter()
        .filter_map(|col| Coordinate::new(row, col))
        .all(|sq| !is_square_attacked(board, state, sq, them))
}

/// Appends the castling moves available to the king on `from`.
pub(super) fn castling_moves(
    color: Color,
    from: Coordinate,
    board: &Board,
    state: &GameState,
    moves: &mut MoveList,
) {
    if from != CastlingSide::king_home(color) || !state.castling.has_any(color) {
        return;
    }
    for side in CastlingSide::ALL {
        if can_castle(board, state, color, side) {
            moves.push(Move::new(from, side.king_target(color)));
        }
    }
}
