//! Rules engine for standard chess.
//!
//! This crate provides:
//! - [`Board`] - piece placement on an 8x8 grid
//! - [`GameState`] - side to move, castling rights, en passant target,
//!   pending promotion and result
//! - [`Game`] - the orchestrator that validates and applies moves
//! - Move generation, attack detection and perft in [`movegen`]
//!
//! # Architecture
//!
//! Each piece kind has a pure function producing pseudo-legal moves from the
//! board and state. Legal moves are the pseudo-legal ones that, played on a
//! copy of the board and state, leave the mover's king unattacked. The board
//! is a plain array, so these copies are cheap and never alias the live game.
//!
//! # Example
//!
//! ```
//! use chess_core::{Coordinate, Move};
//! use chess_engine::{Game, GameResult};
//!
//! let mut game = Game::new();
//! let e2 = Coordinate::from_algebraic("e2").unwrap();
//! let e4 = Coordinate::from_algebraic("e4").unwrap();
//!
//! assert_eq!(game.legal_moves(e2).len(), 2);
//! game.apply_move(Move::new(e2, e4)).unwrap();
//! assert_eq!(game.result(), GameResult::InProgress);
//! ```

mod board;
mod game;
pub mod movegen;
mod state;

pub use board::Board;
pub use game::{Game, GameMove, MoveError, PromotionError};
pub use movegen::{
    can_castle, generate_moves, is_in_check, is_square_attacked, legal_moves_from, make_move,
    pseudo_legal_moves, MoveEffects, MoveList,
};
pub use state::{CastlingRights, GameResult, GameState};
