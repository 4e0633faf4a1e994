//! Terminal UI: menu, board view and coordinate prompt.

pub mod menu;
pub mod prompt;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use duel_core::{Board, GameResponse, GameSession};
use duel_othello::OthelloSession;
use duel_tictactoe::TicTacToeSession;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::Settings;
use crate::game::{GameKind, Signs};
use menu::{MenuAction, MenuScreen};
use prompt::PromptAction;
use ui::GameView;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What to show first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// The game menu; games return to it when they end.
    Menu,
    /// A single game, then exit.
    Game(GameKind),
    /// A single othello game from a custom starting board, then exit.
    OthelloFrom(Board),
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, also when the UI fails.
#[instrument(skip(settings))]
pub fn run(settings: &Settings, launch: Launch) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = guarded(
        || {
            let mut terminal = open_terminal()?;
            match launch {
                Launch::Menu => run_menu(&mut terminal, settings),
                Launch::Game(game) => start_game(&mut terminal, settings, game, None),
                Launch::OthelloFrom(board) => {
                    start_game(&mut terminal, settings, GameKind::Othello, Some(board))
                }
            }
        },
        restore_terminal,
    );

    if let Err(e) = &result {
        warn!(error = %e, "Terminal UI stopped with an error");
    }
    result
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` wins over one from `restore`.
fn guarded<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn open_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen")?;
    raw
}

#[instrument(skip_all)]
fn run_menu(terminal: &mut Tui, settings: &Settings) -> Result<()> {
    let mut menu = MenuScreen::new();

    loop {
        terminal.draw(|frame| menu.render(frame))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match menu.handle_key(key) {
                MenuAction::Stay => {}
                MenuAction::Play(game) => start_game(terminal, settings, game, None)?,
                MenuAction::Quit => {
                    info!("Menu quitting");
                    return Ok(());
                }
            }
        }
    }
}

#[instrument(skip(terminal, settings, start))]
fn start_game(
    terminal: &mut Tui,
    settings: &Settings,
    game: GameKind,
    start: Option<Board>,
) -> Result<()> {
    let signs = settings.signs(game);
    match game {
        GameKind::TicTacToe => {
            let mut session = TicTacToeSession::new();
            let first = session.init();
            play(terminal, &mut session, first, game, &signs)
        }
        GameKind::Othello => {
            let mut session = OthelloSession::new();
            let first = match start {
                Some(board) => session
                    .init_with(board)
                    .context("Invalid othello starting board")?,
                None => session.init(),
            };
            play(terminal, &mut session, first, game, &signs)
        }
    }
}

/// Drives one game: draw, read a key, move the cursor or play the cell.
#[instrument(skip(terminal, session, first, signs), fields(title = session.title()))]
fn play<S: GameSession>(
    terminal: &mut Tui,
    session: &mut S,
    first: GameResponse,
    game: GameKind,
    signs: &Signs,
) -> Result<()> {
    let mut response = first;
    let mut cursor = game.start_cursor();
    let title = session.title();

    loop {
        let view = GameView {
            title,
            response: &response,
            cursor,
            signs,
        };
        terminal.draw(|frame| ui::draw(frame, &view))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }

            // The final board stays up until any key.
            if *response.game_over() {
                info!(outcome = ?response.outcome(), "Leaving finished game");
                return Ok(());
            }

            match prompt::handle_key(cursor, key, session.width(), session.height()) {
                PromptAction::Moved(next) => cursor = next,
                PromptAction::Submit(at) => {
                    let player = *response.next_player();
                    response = session.apply_move(player, at);
                    debug!(%player, %at, message = %response.message(), "Move submitted");
                }
                PromptAction::Leave => {
                    info!("Game abandoned");
                    return Ok(());
                }
            }
        }
    }
}
