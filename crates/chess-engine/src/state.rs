//! Game state that lives beside the board.

use chess_core::{CastlingSide, Color, Coordinate};
use std::fmt;

/// Castling rights flags, one per (color, wing).
///
/// Rights only ever get revoked during play; there is no operation that
/// grants one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    const fn flag(color: Color, side: CastlingSide) -> u8 {
        1u8 << (color.index() * 2 + side.index())
    }

    /// Builds a set of rights from (color, wing) pairs.
    pub fn from_pairs(pairs: &[(Color, CastlingSide)]) -> Self {
        let bits = pairs
            .iter()
            .fold(0u8, |acc, &(color, side)| acc | Self::flag(color, side));
        CastlingRights(bits)
    }

    /// Returns true if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Returns true if `color` may still castle toward either wing.
    #[inline]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastlingSide::King) || self.has(color, CastlingSide::Queen)
    }

    /// Revokes a single wing for a color.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Revokes both wings for a color.
    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        self.revoke(color, CastlingSide::King);
        self.revoke(color, CastlingSide::Queen);
    }
}

/// Outcome of a game. Once it leaves `InProgress` it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameResult {
    #[default]
    InProgress,
    /// White delivered checkmate.
    WhiteWins,
    /// Black delivered checkmate.
    BlackWins,
    /// Stalemate: the side to move has no legal moves and is not in check.
    Draw,
}

impl GameResult {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the result in which `color` has won.
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning color, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Everything about a game that is not piece placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// Square a pawn may capture onto en passant, valid for one reply.
    pub en_passant: Option<Coordinate>,

    /// Square of a pawn that reached the last rank and awaits its new kind.
    pub pending_promotion: Option<Coordinate>,

    pub result: GameResult,
}

impl GameState {
    /// State at the start of a standard game.
    pub const fn new_game() -> Self {
        GameState {
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            pending_promotion: None,
            result: GameResult::InProgress,
        }
    }

    pub const fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub const fn with_castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub const fn with_en_passant(mut self, target: Option<Coordinate>) -> Self {
        self.en_passant = target;
        self
    }

    /// Copy of this state with castling and en passant switched off.
    ///
    /// Attack detection generates moves under this state so that the castling
    /// check never asks about attacks that themselves involve castling.
    pub const fn special_moves_suppressed(self) -> Self {
        GameState {
            castling: CastlingRights::NONE,
            en_passant: None,
            ..self
        }
    }

    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.result.is_over()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
