//! Sign-up form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, SignUpButton, SignUpForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw sign-up form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.signup_form;

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Create your account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Min(0),               // Remaining space
        ])
        .margin(1)
        .split(area);

    for (index, chunk) in chunks.iter().take(SignUpForm::BUTTONS_ROW).enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                *chunk,
                field,
                form.error_for(field.name),
                form.active_field() == index,
            );
        }
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.signup_form;
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Sign up (primary)
            Constraint::Length(BUTTON_HEIGHT), // Back to sign in
            Constraint::Min(0),
        ])
        .split(inner_area);

    let buttons = [
        (SignUpButton::SignUp, Color::Green),
        (SignUpButton::BackToSignIn, Color::Gray),
    ];

    for (chunk, (button, accent)) in button_chunks.iter().zip(buttons) {
        render_action_button(
            frame,
            *chunk,
            button.label(),
            is_focused && form.selected_button == button,
            accent,
        );
    }
}
