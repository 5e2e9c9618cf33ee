//! Parsing of the commands typed at the prompt.

use chess_core::{Coordinate, Move, Promotion};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("not a square: {0}")]
    InvalidSquare(String),
    #[error("'moves' needs a square, e.g. 'moves e2'")]
    MissingSquare,
    #[error("not a promotion choice: {0} (use q, r, b or n)")]
    InvalidPromotion(String),
}

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move, typed as `e2 e4` or `e2e4`.
    Play(Move),
    /// List the legal destinations of the piece on a square.
    Moves(Coordinate),
    /// Redraw the board.
    Board,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parse one line of input.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => Ok(Command::Empty),
            ["quit" | "exit" | "q"] => Ok(Command::Quit),
            ["help" | "?"] => Ok(Command::Help),
            ["board"] => Ok(Command::Board),
            ["moves"] => Err(InputError::MissingSquare),
            ["moves", square] => parse_square(square).map(Command::Moves),
            [from, to] => Ok(Command::Play(Move::new(parse_square(from)?, parse_square(to)?))),
            [squares] if squares.len() == 4 => Move::from_squares(squares)
                .map(Command::Play)
                .ok_or_else(|| InputError::InvalidSquare(squares.to_string())),
            _ => Err(InputError::UnknownCommand(input.to_string())),
        }
    }
}

fn parse_square(s: &str) -> Result<Coordinate, InputError> {
    Coordinate::from_algebraic(s).ok_or_else(|| InputError::InvalidSquare(s.to_string()))
}

/// Parse the answer to the promotion prompt. Accepts the letter or the
/// piece name.
pub fn parse_promotion(input: &str) -> Result<Promotion, InputError> {
    let answer = input.trim().to_ascii_lowercase();
    let choice = match answer.as_str() {
        "queen" => Some(Promotion::Queen),
        "rook" => Some(Promotion::Rook),
        "bishop" => Some(Promotion::Bishop),
        "knight" => Some(Promotion::Knight),
        _ => {
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Promotion::from_char(c),
                _ => None,
            }
        }
    };
    choice.ok_or(InputError::InvalidPromotion(answer))
}

pub const HELP: &str = "\
Commands:
  e2 e4 | e2e4   move the piece on e2 to e4
  moves <square> list where the piece on <square> can go
  board          redraw the board
  help           show this text
  quit           leave the game";
