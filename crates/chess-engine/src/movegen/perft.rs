//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! A pawn reaching the last rank counts as one move here: the promotion
//! choice is made after the move, not as part of it.

use super::{generate_moves, make_move};
use crate::{Board, GameState};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, state);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next_board = board.clone();
        let mut next_state = *state;
        make_move(&mut next_board, &mut next_state, *m);
        nodes += perft(&next_board, &next_state, depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, state: &GameState, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(board, state);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next_board = board.clone();
        let mut next_state = *state;
        make_move(&mut next_board, &mut next_state, *m);
        let nodes = if depth > 1 {
            perft(&next_board, &next_state, depth - 1)
        } else {
            1
        };
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
