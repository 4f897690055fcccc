//! Stateless UI rendering for tic-tac-toe.
//!
//! Everything drawn comes from a [`Snapshot`]; nothing here feeds back
//! into the session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Outcome, Player, Position, Square};
use crate::session::{NameEntry, PhaseKind, Snapshot};

const HIGHLIGHT: Color = Color::Magenta;

/// Renders the current phase.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    match (snapshot.phase, snapshot.name_entry) {
        (PhaseKind::NameEntry, Some(entry)) => draw_name_entry(frame, entry),
        _ => draw_game(frame, snapshot),
    }
}

fn draw_name_entry(frame: &mut Frame, entry: &NameEntry) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player X
            Constraint::Length(3), // Player O
            Constraint::Length(3), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("Enter Player Names")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_name_field(frame, chunks[1], entry, 0);
    draw_name_field(frame, chunks[2], entry, 1);

    let hint = Paragraph::new(vec![
        Line::from("Press Enter to continue."),
        Line::from("↑↓: Switch field | Esc: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn draw_name_field(frame: &mut Frame, area: Rect, entry: &NameEntry, index: usize) {
    let focused = *entry.focus() == index;
    let text = &entry.fields()[index];

    let prompt = if focused { "> " } else { "  " };
    let value = if text.is_empty() {
        Span::styled(
            entry.placeholders()[index].as_str(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(text.as_str(), Style::default().fg(Color::White))
    };

    let border = if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default()
    };
    let player = NameEntry::field_player(index);
    let field = Paragraph::new(Line::from(vec![
        Span::styled(prompt, Style::default().fg(HIGHLIGHT)),
        value,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("Player {} name", player)),
    );
    frame.render_widget(field, area);

    if focused {
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(3).saturating_add(typed);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_game(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Score
            Constraint::Min(11), // Board
            Constraint::Length(3), // Status
            Constraint::Length(4), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let players = snapshot.players;
    let score = Paragraph::new(format!(
        "Score: {} (X) {} - {} {} (O)",
        players.name(Player::X),
        players.score(Player::X),
        players.score(Player::O),
        players.name(Player::O),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    draw_board(frame, chunks[2], snapshot);

    let status_text = Paragraph::new(status_line(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);

    let help = Paragraph::new(vec![
        Line::from("Arrows or h/j/k/l: Move | Enter/Space: Place"),
        Line::from("r: New round | Ctrl+R: Reset all | q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[4]);
}

/// Text of the status line for the current outcome.
pub fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.outcome {
        Outcome::InProgress => format!(
            "{}'s turn ({})",
            snapshot.active_name(),
            snapshot.active_player
        ),
        Outcome::Win { player, .. } => format!(
            "{} wins! (Press Enter to play again)",
            snapshot.players.name(*player)
        ),
        Outcome::Draw => "It's a draw! (Press Enter to play again)".to_string(),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let board_area = center_rect(area, 40, 11);

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

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], snapshot, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], snapshot, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, pos: Position) {
    let (symbol, base_style) = match snapshot.board.get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let winning = snapshot
        .outcome
        .winning_line()
        .is_some_and(|line| line.contains(pos));

    // The cursor rests on the completing cell after a win, so the
    // winning colour takes precedence and the cursor is kept as an underline.
    let style = match (winning, pos == snapshot.cursor) {
        (true, true) => base_style
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::Green).fg(Color::Black),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let cell = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
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
