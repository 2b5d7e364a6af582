//! Form domain layer
//!
//! Type-safe form handling for the sign-up screen: field values, validation
//! rules and the validate-then-submit workflow.

mod field;
mod form_state;
mod submit;
pub mod validation;

pub use field::FormField;
pub use form_state::{FieldAction, Form, SignUpButton, SignUpForm, SignUpFormData};
pub use submit::{submit_sign_up, SubmitOutcome};
pub use validation::{FieldErrors, ValidationErrors};
