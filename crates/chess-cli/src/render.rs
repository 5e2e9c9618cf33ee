//! Text rendering of the board.

use crate::config::DisplayConfig;
use chess_core::{Coordinate, BOARD_SIZE};
use chess_engine::Board;

const FILES: &str = "abcdefgh";

/// Draws `board` as text, one rank per line. Empty squares listed in
/// `marked` are drawn as `*`.
pub fn render(board: &Board, display: &DisplayConfig, marked: &[Coordinate]) -> String {
    let order: Vec<u8> = if display.flip {
        (0..BOARD_SIZE).rev().collect()
    } else {
        (0..BOARD_SIZE).collect()
    };
    let empty = if display.unicode { '·' } else { '.' };

    let mut out = String::new();
    for &row in &order {
        if display.show_coordinates {
            out.push(char::from(b'8' - row));
            out.push(' ');
        }
        let cells: Vec<String> = order
            .iter()
            .map(|&col| {
                let Some(sq) = Coordinate::new(row, col) else {
                    return empty.to_string();
                };
                match board.get(sq) {
                    Some(piece) if display.unicode => piece.to_glyph().to_string(),
                    Some(piece) => piece.to_char().to_string(),
                    None if marked.contains(&sq) => "*".to_string(),
                    None => empty.to_string(),
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    if display.show_coordinates {
        let files: Vec<String> = if display.flip {
            FILES.chars().rev().map(String::from).collect()
        } else {
            FILES.chars().map(String::from).collect()
        };
        out.push_str("  ");
        out.push_str(&files.join(" "));
        out.push('\n');
    }
    out
}
