//! Form state management and the sign-up form

use super::field::FormField;
use super::validation::{FieldErrors, ValidationErrors};
use serde::Serialize;
use std::fmt;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Payload sent to `POST /users`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignUpFormData {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignUpFormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpFormData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What pressing Enter on a field should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Focus moved to the next field
    FocusNext,
    /// Last field submitted: submit the whole form
    SubmitForm,
    /// Not on an input field
    None,
}

/// Buttons on the sign-up action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpButton {
    #[default]
    SignUp,
    BackToSignIn,
}

impl SignUpButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::SignUp => Self::BackToSignIn,
            Self::BackToSignIn => Self::SignUp,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SignUp => "Sign up",
            Self::BackToSignIn => "Back to sign in",
        }
    }
}

// Sign Up Form
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: SignUpButton,
    errors: FieldErrors,
}

impl SignUpForm {
    /// Index of the action panel row
    pub const BUTTONS_ROW: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            selected_button: SignUpButton::default(),
            errors: FieldErrors::new(),
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Snapshot the current values as a submission payload
    pub fn data(&self) -> SignUpFormData {
        SignUpFormData {
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Enter on a field: chain focus to the next field, or submit from the last
    pub fn submit_field(&mut self) -> FieldAction {
        match self.active_field_index {
            0 | 1 => {
                self.active_field_index += 1;
                FieldAction::FocusNext
            }
            2 => FieldAction::SubmitForm,
            _ => FieldAction::None,
        }
    }

    /// Replace all field errors
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Apply validation violations as field errors
    pub fn apply_validation_errors(&mut self, errors: ValidationErrors) {
        self.set_errors(errors.into_field_errors());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Inline error message for a field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        4 // name, email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            // Index 3 is buttons row, no FormField for it
            _ => None,
        }
    }
}
