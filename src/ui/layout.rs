//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Key hints for the current view
fn key_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.state.has_notifications() {
        return &[("Enter", "ok")];
    }
    match app.state.current_view() {
        View::SignIn => &[("c", "create account"), ("q", "quit")],
        View::SignUp if app.state.signup_form.is_buttons_row_active() => &[
            ("Tab", "next"),
            ("↑↓", "select"),
            ("Enter", "confirm"),
            ("Esc", "back"),
        ],
        View::SignUp => &[
            ("Tab", "next"),
            ("Enter", "next/send"),
            ("Ctrl+S", "sign up"),
            ("Esc", "back"),
        ],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view().title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.state.current_view() == View::SignUp && app.state.signup_form.has_errors() {
        spans.push(Span::styled(
            " Fix the highlighted fields ",
            Style::default().fg(Color::Red),
        ));
    }

    let pending = app.state.notifications.len();
    if pending > 1 {
        spans.push(Span::styled(
            format!(" +{} more ", pending - 1),
            Style::default().fg(Color::Yellow),
        ));
    }

    for (key, action) in key_hints(app) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
