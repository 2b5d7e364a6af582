//! Sign-in landing view
//!
//! Only the entry point to account creation lives here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the sign-in view
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding (flex)
            Constraint::Length(3), // Content
            Constraint::Min(0),    // Bottom padding (flex)
        ])
        .split(inner);

    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "c",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to create an account"),
        ]),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(content, chunks[1]);
}
