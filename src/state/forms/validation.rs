//! Sign-up validation rules
//!
//! Every field is checked in a single pass so that all violations can be shown
//! inline at once. A field reports at most one violation: its first failing
//! rule.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use super::form_state::SignUpFormData;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Field name to human-readable message
pub type FieldErrors = BTreeMap<String, String>;

/// A (field, message) pair produced by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// All violations found in one validation pass (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Names of the fields that failed, in validation order
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Map violations to per-field messages. A later violation for the same
    /// field replaces an earlier one.
    pub fn into_field_errors(self) -> FieldErrors {
        self.violations
            .into_iter()
            .map(|v| (v.field.to_string(), v.message))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn check_name(name: &str) -> Option<FieldViolation> {
    if name.trim().is_empty() {
        return Some(FieldViolation::new("name", NAME_REQUIRED));
    }
    None
}

fn check_email(email: &str) -> Option<FieldViolation> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldViolation::new("email", EMAIL_REQUIRED));
    }
    if !is_valid_email(email) {
        return Some(FieldViolation::new("email", EMAIL_INVALID));
    }
    None
}

fn check_password(password: &str) -> Option<FieldViolation> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(FieldViolation::new("password", PASSWORD_TOO_SHORT));
    }
    None
}

/// Syntactic email check (local part, `@`, dotted domain)
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Validate sign-up input, collecting every field violation
pub fn validate(data: &SignUpFormData) -> Result<(), ValidationErrors> {
    let violations: Vec<FieldViolation> = [
        check_name(&data.name),
        check_email(&data.email),
        check_password(&data.password),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}
