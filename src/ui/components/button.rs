//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
fn render_button(frame: &mut Frame, area: Rect, content: &str, text_style: Style, border: Color) {
    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(paragraph.block(block), area);
}

/// Render an action panel button; `accent` colors the selected state
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Color,
) {
    if is_selected {
        let text_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        render_button(frame, area, &format!("▸ {label}"), text_style, accent);
    } else {
        render_button(frame, area, label, Style::default(), Color::DarkGray);
    }
}
