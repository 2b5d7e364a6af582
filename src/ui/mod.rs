//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod sign_in;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view() {
        View::SignIn => sign_in::draw(frame, main_area),
        View::SignUp => forms::draw_sign_up(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Notifications are modal and drawn on top of everything
    if let Some(notification) = app.state.notifications.current() {
        components::render_notification_dialog(frame, notification);
    }
}
