//! Game menu screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::game::GameKind;

/// Outcome of a key press on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Nothing to do beyond redrawing.
    Stay,
    /// Start the selected game.
    Play(GameKind),
    /// Leave the program.
    Quit,
}

/// State for the game menu.
#[derive(Debug)]
pub struct MenuScreen {
    games: Vec<GameKind>,
    list_state: ListState,
}

impl MenuScreen {
    /// Creates the menu with the first game selected.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            games: GameKind::iter().collect(),
            list_state,
        }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = self.games.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = self.games.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected game.
    pub fn selected(&self) -> GameKind {
        let idx = self.list_state.selected().unwrap_or(0);
        self.games[idx.min(self.games.len() - 1)]
    }

    /// Renders the menu.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Mini CLI Games")
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let welcome = Paragraph::new("Welcome to command line two-player games!")
            .alignment(Alignment::Center);
        frame.render_widget(welcome, chunks[1]);

        let items: Vec<ListItem> = self
            .games
            .iter()
            .map(|game| ListItem::new(game.to_string()))
            .collect();
        let menu = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("What game would you like to play?"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓/jk: Navigate | Enter: Select | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    /// Handles a key press.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                MenuAction::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                MenuAction::Stay
            }
            KeyCode::Enter => {
                let game = self.selected();
                info!(%game, "Game selected");
                MenuAction::Play(game)
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => MenuAction::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
            code => {
                debug!(?code, "Unbound key");
                MenuAction::Stay
            }
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
