//! Two-player chess in the terminal.

mod command;
mod config;
mod render;
mod session;

use chess_engine::Game;
use clap::Parser;
use config::CliConfig;
use session::Session;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play chess against a friend in the terminal")]
struct Cli {
    /// Configuration file (ignored if it does not exist)
    #[arg(long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,
    /// Draw pieces as chess glyphs
    #[arg(long)]
    unicode: bool,
    /// Draw the board from Black's side
    #[arg(long)]
    flip: bool,
    /// Always promote to a queen
    #[arg(long)]
    auto_queen: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match CliConfig::load(&cli.config) {
        Ok(config) => config.apply_flags(cli.unicode, cli.flip, cli.auto_queen),
        Err(e) => {
            eprintln!("{}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(Game::new(), config, stdin.lock(), stdout.lock());
    if let Err(e) = session.run() {
        tracing::error!("terminal I/O failed: {}", e);
        return ExitCode::FAILURE;
    }
    let game = session.into_game();
    tracing::info!(
        plies = game.ply_count(),
        result = %game.result(),
        "session finished"
    );
    ExitCode::SUCCESS
}
