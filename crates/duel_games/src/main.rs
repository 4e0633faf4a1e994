//! Duel Games - two-player tic-tac-toe and othello in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use duel_games::{
    GameKind, Settings,
    config::load_start_board,
    cli::{Cli, Command},
    tui::{self, Launch},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    init_tracing(&settings)?;
    info!(config = %cli.config.display(), "Starting Duel Games");

    let launch = match cli.command {
        None | Some(Command::Menu) => Launch::Menu,
        Some(Command::Tictactoe) => Launch::Game(GameKind::TicTacToe),
        Some(Command::Othello { start: None }) => Launch::Game(GameKind::Othello),
        Some(Command::Othello { start: Some(path) }) => Launch::OthelloFrom(
            load_start_board(&path).context("Failed to load starting board")?,
        ),
    };

    tui::run(&settings, launch)?;

    println!("Thanks for playing!");
    Ok(())
}

/// Logs to the configured file so the TUI is not disturbed.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create {}", settings.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
