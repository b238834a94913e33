//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tic_tac_toe::{Player, Position, Snapshot};

use crate::app::{App, banner};

const HELP: &str = "arrows move · 1-9/Enter play · r restart · a reset · q quit";

/// Renders the whole screen from the app's current snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(2),  // Banner
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Score
            Constraint::Length(1),  // Notice / help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_banner(frame, chunks[1], &snapshot);
    draw_board(frame, chunks[2], &snapshot, app.cursor());
    draw_score(frame, chunks[3], &snapshot);

    let footer = match app.notice() {
        Some(notice) => Paragraph::new(notice).style(Style::default().fg(Color::Yellow)),
        None if app.show_help() => {
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray))
        }
        None => Paragraph::new(""),
    };
    frame.render_widget(footer.alignment(Alignment::Center), chunks[4]);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_banner(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let style = match (snapshot.outcome.winner(), snapshot.is_over()) {
        (Some(player), _) => player_style(player),
        (None, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        (None, false) => player_style(snapshot.current_player),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(banner(snapshot), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, snapshot, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cell_area, snapshot, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, pos: Position) {
    let (symbol, base_style) = match snapshot.cell(pos) {
        None => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => (player.to_string(), player_style(player)),
    };

    let style = if snapshot.is_highlighted(pos) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if pos == cursor && !snapshot.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_score(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let score = &snapshot.score;
    let line = Line::from(vec![
        Span::styled(format!("X: {}", score.x()), player_style(Player::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", score.o()), player_style(Player::O)),
        Span::raw("   "),
        Span::styled(
            format!("Draws: {}", score.draws()),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, 41, 3));
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
