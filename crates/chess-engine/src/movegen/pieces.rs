//! Movement patterns of the individual piece kinds.

use super::MoveList;
use crate::{Board, GameState};
use chess_core::{Color, Coordinate, Move, PieceKind};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks each ray until the edge or the first occupied square, which is
/// included only when it holds an enemy piece.
fn slide(color: Color, from: Coordinate, board: &Board, rays: &[(i8, i8)], moves: &mut MoveList) {
    for &(row_delta, col_delta) in rays {
        let mut current = from;
        while let Some(next) = current.offset(row_delta, col_delta) {
            match board.get(next) {
                None => moves.push(Move::new(from, next)),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Keeps the on-board offsets not occupied by a friendly piece.
fn step(color: Color, from: Coordinate, board: &Board, offsets: &[(i8, i8)], moves: &mut MoveList) {
    for &(row_delta, col_delta) in offsets {
        if let Some(to) = from.offset(row_delta, col_delta) {
            if !board.has_piece_of_color(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

pub(super) fn knight_moves(color: Color, from: Coordinate, board: &Board, moves: &mut MoveList) {
    step(color, from, board, &KNIGHT_OFFSETS, moves);
}

pub(super) fn bishop_moves(color: Color, from: Coordinate, board: &Board, moves: &mut MoveList) {
    slide(color, from, board, &DIAGONAL, moves);
}

pub(super) fn rook_moves(color: Color, from: Coordinate, board: &Board, moves: &mut MoveList) {
    slide(color, from, board, &ORTHOGONAL, moves);
}

pub(super) fn queen_moves(color: Color, from: Coordinate, board: &Board, moves: &mut MoveList) {
    slide(color, from, board, &ORTHOGONAL, moves);
    slide(color, from, board, &DIAGONAL, moves);
}

/// One-square king moves; castling is generated separately.
pub(super) fn king_steps(color: Color, from: Coordinate, board: &Board, moves: &mut MoveList) {
    step(color, from, board, &KING_OFFSETS, moves);
}

/// The two squares a pawn of `color` on `from` attacks diagonally.
pub(super) fn pawn_attacks(color: Color, from: Coordinate) -> [Option<Coordinate>; 2] {
    let dir = color.pawn_direction();
    [from.offset(dir, -1), from.offset(dir, 1)]
}

pub(super) fn pawn_moves(
    color: Color,
    from: Coordinate,
    board: &Board,
    state: &GameState,
    moves: &mut MoveList,
) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            moves.push(Move::new(from, one));

            if from.row() == color.pawn_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from).into_iter().flatten() {
        if board.has_piece_of_color(to, color.opposite())
            || is_en_passant_capture(color, to, board, state)
        {
            moves.push(Move::new(from, to));
        }
    }
}

/// A diagonal onto the en passant target captures the enemy pawn that just
/// double-stepped past it.
fn is_en_passant_capture(color: Color, to: Coordinate, board: &Board, state: &GameState) -> bool {
    if state.en_passant != Some(to) {
        return false;
    }
    to.offset(-color.pawn_direction(), 0)
        .and_then(|victim| board.get(victim))
        .is_some_and(|piece| piece.is(PieceKind::Pawn) && piece.color != color)
}
