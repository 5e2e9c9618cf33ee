//! The interactive game loop.

use crate::command::{parse_promotion, Command, HELP};
use crate::config::CliConfig;
use crate::render::render;
use chess_core::{Coordinate, Promotion};
use chess_engine::{Game, GameResult};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One game played over a line-based reader and writer.
pub struct Session<R: BufRead, W: Write> {
    game: Game,
    config: CliConfig,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: CliConfig, reader: R, writer: W) -> Self {
        Self {
            game,
            config,
            reader,
            writer,
        }
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Runs until the game ends, the player quits, or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_board(&[])?;

        loop {
            if self.game.is_game_over() {
                return self.announce_result();
            }

            write!(self.writer, "{} to move> ", self.game.side_to_move())?;
            self.writer.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.writer)?;
                return Ok(());
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.writer, "{}", e)?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Play(m) => match self.game.apply_move(m) {
                Ok(()) => {
                    if self.game.pending_promotion().is_some() {
                        self.resolve_promotion()?;
                    }
                    self.show_board(&[])?;
                    if self.game.is_check() && !self.game.is_game_over() {
                        writeln!(self.writer, "Check!")?;
                    }
                }
                Err(e) => {
                    debug!(%m, error = %e, "move rejected");
                    writeln!(self.writer, "{}", e)?;
                }
            },
            Command::Moves(from) => self.list_moves(from)?,
            Command::Board => self.show_board(&[])?,
            Command::Help => writeln!(self.writer, "{}", HELP)?,
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn list_moves(&mut self, from: Coordinate) -> io::Result<()> {
        let targets: Vec<Coordinate> = self.game.legal_moves(from).iter().map(|m| m.to).collect();
        if targets.is_empty() {
            return writeln!(self.writer, "no legal moves from {}", from);
        }
        self.show_board(&targets)?;
        let names: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
        writeln!(self.writer, "{}: {}", from, names.join(" "))
    }

    /// Asks until a valid piece is chosen. End of input picks a queen.
    fn resolve_promotion(&mut self) -> io::Result<()> {
        let choice = if self.config.play.auto_queen {
            Promotion::Queen
        } else {
            loop {
                write!(self.writer, "Promote to (q/r/b/n)> ")?;
                self.writer.flush()?;
                let Some(line) = self.read_line()? else {
                    break Promotion::Queen;
                };
                match parse_promotion(&line) {
                    Ok(choice) => break choice,
                    Err(e) => writeln!(self.writer, "{}", e)?,
                }
            }
        };

        if let Err(e) = self.game.promote(choice) {
            writeln!(self.writer, "{}", e)?;
        }
        Ok(())
    }

    fn announce_result(&mut self) -> io::Result<()> {
        match self.game.result() {
            GameResult::Draw => writeln!(self.writer, "Stalemate: the game is a draw."),
            result => writeln!(self.writer, "Checkmate! {}.", result),
        }
    }

    fn show_board(&mut self, marked: &[Coordinate]) -> io::Result<()> {
        write!(
            self.writer,
            "{}",
            render(self.game.board(), &self.config.display, marked)
        )
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
