//! Application state definitions

use super::forms::SignUpForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignIn,
    SignUp,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::SignIn => "Sign in",
            View::SignUp => "Create your account",
        }
    }
}

/// Returns to the previous screen in the stack
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn go_back(&mut self);
}

/// Displays a titled message that the user acknowledges with OK
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Kind of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A titled message shown in a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// View stack
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    pub current_view: View,
    pub view_history: Vec<View>,
}

impl Navigation {
    /// Navigate to a new view, saving the current one to history
    pub fn navigate(&mut self, view: View) {
        self.view_history.push(self.current_view);
        self.current_view = view;
    }
}

impl Navigator for Navigation {
    /// Go back to the previous view. Does nothing on the root view.
    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.current_view = view;
        }
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    /// The notification currently displayed
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Acknowledge the current notification
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: Navigation,
    pub notifications: NotificationQueue,
    pub signup_form: SignUpForm,
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.navigation.current_view
    }

    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Reset the sign-up form to its empty state
    pub fn clear_form(&mut self) {
        self.signup_form = SignUpForm::new();
    }
}
