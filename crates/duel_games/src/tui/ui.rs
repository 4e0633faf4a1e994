//! Stateless board rendering.

use duel_core::{Cell, Coordinates, GameResponse, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::Signs;

/// Everything needed to draw one frame of a game.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    /// Game name shown in the banner.
    pub title: &'a str,
    /// Latest session snapshot.
    pub response: &'a GameResponse,
    /// Cell under the cursor.
    pub cursor: Coordinates,
    /// Player signs.
    pub signs: &'a Signs,
}

/// Returns true when the cursor cell would accept a disc or mark.
pub fn can_place(response: &GameResponse, at: Coordinates) -> bool {
    let empty = response.board().get(at) == Some(Cell::Empty);
    match response.legal_moves() {
        Some(_) => empty && response.is_legal(at),
        None => empty,
    }
}

/// Style of a cell on the board.
pub fn cell_style(response: &GameResponse, at: Coordinates, cursor: Coordinates) -> Style {
    let owner = response.board().get(at).and_then(Cell::owner);

    if *response.game_over() {
        return match owner {
            Some(Player::One) => Style::default().fg(Color::White).bg(Color::Black),
            Some(Player::Two) => Style::default().fg(Color::Black).bg(Color::White),
            None => Style::default(),
        };
    }

    if at == cursor {
        let bg = if can_place(response, at) {
            Color::Green
        } else {
            Color::Red
        };
        return Style::default().fg(Color::Black).bg(bg);
    }

    match owner {
        Some(Player::One) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Some(Player::Two) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    }
}

/// Draws banner, board, and status lines.
pub fn draw(frame: &mut Frame, view: &GameView<'_>) {
    let board = view.response.board();
    let board_height = board.height() as u16 * 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Min(6),               // Status
            Constraint::Length(3),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("  {}  ", view.title))
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let grid = Paragraph::new(board_lines(view)).alignment(Alignment::Center);
    frame.render_widget(grid, chunks[1]);

    let status = Paragraph::new(status_lines(view)).alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    let help_text = if *view.response.game_over() {
        "Press any key to continue"
    } else {
        "←↑↓→/hjkl: Move | Enter: Place | q/Esc: Leave"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn board_lines(view: &GameView<'_>) -> Vec<Line<'static>> {
    let board = view.response.board();
    let width = board.width();
    let dim = Style::default().fg(Color::DarkGray);
    let edge = |left: &str, mid: &str, right: &str| {
        let inner = vec!["───"; width].join(mid);
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}{}{}", left, inner, right), dim),
        ])
    };

    let mut header = vec![Span::styled("y/x ", dim)];
    header.extend((0..width).map(|x| Span::styled(format!(" {}  ", x), dim)));
    let mut lines = vec![Line::from(header), edge("┌", "┬", "┐")];

    for y in 0..board.height() {
        let mut spans = vec![Span::styled(format!(" {}  ", y), dim)];
        for x in 0..width {
            let at = Coordinates::new(x as i32, y as i32);
            let sign = board
                .get(at)
                .map_or(" ", |cell| view.signs.cell(cell))
                .to_string();
            spans.push(Span::styled("│", dim));
            spans.push(Span::styled(
                format!(" {} ", sign),
                cell_style(view.response, at, view.cursor),
            ));
        }
        spans.push(Span::styled("│", dim));
        lines.push(Line::from(spans));

        if y + 1 < board.height() {
            lines.push(edge("├", "┼", "┤"));
        }
    }
    lines.push(edge("└", "┴", "┘"));
    lines
}

fn status_lines(view: &GameView<'_>) -> Vec<Line<'static>> {
    let response = view.response;
    let mut lines = Vec::new();

    if !*response.game_over() {
        lines.push(Line::from(format!(
            "{}'s turn",
            view.signs.of(*response.next_player())
        )));
    }
    lines.push(Line::from(""));

    let message_style = if response.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(Span::styled(
        view.signs.label(response.message()),
        message_style,
    )));

    if let Some(score) = response.score() {
        let points_style = if *response.game_over() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            points_line(view.signs, score.of(Player::One), score.of(Player::Two)),
            points_style,
        )));
    }
    lines
}

/// `Points: ○: 2, ●: 2`
pub fn points_line(signs: &Signs, player_one: usize, player_two: usize) -> String {
    format!(
        "Points: {}: {}, {}: {}",
        signs.of(Player::One),
        player_one,
        signs.of(Player::Two),
        player_two
    )
}
