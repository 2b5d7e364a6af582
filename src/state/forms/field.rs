//! Form field value objects

use std::fmt;

/// Mask character used to render secret field values
const SECRET_MASK: char = '•';

/// Represents a single text input with its configuration and value
#[derive(Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Secret fields (passwords) are masked when displayed
    pub is_secret: bool,
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = if self.is_secret {
            &"[REDACTED]"
        } else {
            &self.value
        };
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", value)
            .field("is_secret", &self.is_secret)
            .finish()
    }
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new secret field whose value is masked on screen
    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            std::iter::repeat(SECRET_MASK)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("name", "Name");
        assert_eq!(field.name, "name");
        assert_eq!(field.label, "Name");
        assert_eq!(field.as_text(), "");
        assert!(!field.is_secret);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("name", "Name");
        field.push_char('A');
        field.push_char('n');
        field.push_char('a');
        assert_eq!(field.as_text(), "Ana");
        field.pop_char();
        assert_eq!(field.as_text(), "An");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("name", "Name");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_pop_char_removes_whole_multibyte_char() {
        let mut field = FormField::text("name", "Name");
        field.set_text("João");
        field.pop_char();
        assert_eq!(field.as_text(), "Joã");
    }

    #[test]
    fn test_display_value_plain() {
        let mut field = FormField::text("email", "Email");
        field.set_text("ana@x.com");
        assert_eq!(field.display_value(), "ana@x.com");
    }

    #[test]
    fn test_display_value_secret_is_masked() {
        let mut field = FormField::secret("password", "Password");
        field.set_text("señor1");
        assert!(field.is_secret);
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.as_text(), "señor1");
    }

    #[test]
    fn test_debug_redacts_secret_value() {
        let mut field = FormField::secret("password", "Password");
        field.set_text("hunter22");
        let debug = format!("{field:?}");
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_shows_plain_value() {
        let mut field = FormField::text("email", "Email");
        field.set_text("ana@x.com");
        assert!(format!("{field:?}").contains("ana@x.com"));
    }
}
