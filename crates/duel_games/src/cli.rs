//! Command-line interface for duel_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Duel Games - two-player board games in the terminal
#[derive(Parser, Debug)]
#[command(name = "duel_games")]
#[command(about = "Tic-tac-toe and othello for two players at one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "duel_games.toml")]
    pub config: PathBuf,

    /// Game to start; shows the menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the game menu
    Menu,

    /// Play tic-tac-toe
    Tictactoe,

    /// Play othello
    Othello {
        /// JSON file with a custom 8x8 starting board (rows of 0, 1 and 2)
        #[arg(long)]
        start: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::try_parse_from(["duel_games"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("duel_games.toml"));
    }

    #[test]
    fn test_othello_start_board() {
        let cli =
            Cli::try_parse_from(["duel_games", "-c", "my.toml", "othello", "--start", "b.json"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("my.toml"));
        assert_eq!(
            cli.command,
            Some(Command::Othello {
                start: Some(PathBuf::from("b.json"))
            })
        );
    }

    #[test]
    fn test_unknown_game_is_rejected() {
        assert!(Cli::try_parse_from(["duel_games", "chess"]).is_err());
    }
}
