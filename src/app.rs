//! Application state and core logic

use crate::api::UsersApiTrait;
use crate::state::{
    submit_sign_up, AppState, FieldAction, Form, Navigator, SignUpButton, SubmitOutcome, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Users API used to register accounts
    pub api: Box<dyn UsersApiTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Box<dyn UsersApiTrait>) -> Self {
        Self {
            state: AppState::default(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notification dialog is modal: Enter/Esc acknowledges it
        if self.state.has_notifications() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notifications.dismiss();
            }
            return Ok(());
        }

        match self.state.current_view() {
            View::SignIn => self.handle_sign_in_key(key),
            View::SignUp => self.handle_sign_up_key(key).await,
        }

        Ok(())
    }

    /// Open the sign-up screen with an empty form
    pub fn open_sign_up(&mut self) {
        self.state.clear_form();
        self.state.navigation.navigate(View::SignUp);
    }

    /// Leave the sign-up screen without submitting
    pub fn back_to_sign_in(&mut self) {
        self.state.clear_form();
        self.state.navigation.go_back();
    }

    /// Run the submit workflow against the current form
    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let AppState {
            navigation,
            notifications,
            signup_form,
            ..
        } = &mut self.state;

        let outcome =
            submit_sign_up(signup_form, self.api.as_ref(), navigation, notifications).await;

        match outcome {
            SubmitOutcome::Registered => self.state.clear_form(),
            SubmitOutcome::Invalid => self.focus_first_invalid_field(),
            SubmitOutcome::Failed => {}
        }
        outcome
    }

    fn focus_first_invalid_field(&mut self) {
        let form = &mut self.state.signup_form;
        let first_invalid = (0..form.field_count()).find(|&index| {
            form.get_field(index)
                .is_some_and(|field| form.error_for(field.name).is_some())
        });
        if let Some(index) = first_invalid {
            form.set_active_field(index);
        }
    }

    /// Handle keys in Sign In view
    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Enter => self.open_sign_up(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in Sign Up view
    async fn handle_sign_up_key(&mut self, key: KeyEvent) {
        let on_action_panel = self.state.signup_form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.signup_form.next_field(),
            KeyCode::BackTab => self.state.signup_form.prev_field(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right if on_action_panel => {
                let form = &mut self.state.signup_form;
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if on_action_panel => match self.state.signup_form.selected_button {
                SignUpButton::SignUp => {
                    self.submit_form().await;
                }
                SignUpButton::BackToSignIn => self.back_to_sign_in(),
            },
            // Submit from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Esc => self.back_to_sign_in(),
            KeyCode::Enter => {
                if self.state.signup_form.submit_field() == FieldAction::SubmitForm {
                    self.submit_form().await;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.signup_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.signup_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }
}
