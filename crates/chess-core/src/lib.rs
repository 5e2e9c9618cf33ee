//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Coordinate`] for board squares (row/column)
//! - [`Move`] for move representation
//! - [`CastlingSide`] and [`Promotion`] for the special-move vocabularies

mod castling;
mod color;
mod coord;
mod mov;
mod piece;

pub use castling::{CastlingSide, KING_HOME_COL};
pub use color::Color;
pub use coord::{in_bounds, Coordinate, BOARD_SIZE};
pub use mov::Move;
pub use piece::{Piece, PieceKind, Promotion};
