//! Contact form validation
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::Messages;

static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").ok());

/// Raw field contents as read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Trimmed values that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,
    #[error("email is not shaped like local@domain.tld")]
    InvalidEmail,
    #[error("message has {len} UTF-16 units, at least {min} required")]
    TooShort { len: usize, min: usize },
}

impl ValidationError {
    /// The field that should receive focus.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptyName => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::TooShort { .. } => Field::Message,
        }
    }

    /// Short text for the field's native validity bubble.
    #[must_use]
    pub fn validity_message(&self, messages: &Messages) -> String {
        match self {
            Self::EmptyName => messages.name_validity.clone(),
            Self::InvalidEmail => messages.email_validity.clone(),
            Self::TooShort { min, .. } => fill_min(&messages.message_validity, *min),
        }
    }

    /// Longer text for the feedback region.
    #[must_use]
    pub fn feedback_message(&self, messages: &Messages) -> String {
        match self {
            Self::EmptyName => messages.name_feedback.clone(),
            Self::InvalidEmail => messages.email_feedback.clone(),
            Self::TooShort { min, .. } => fill_min(&messages.message_feedback, *min),
        }
    }
}

fn fill_min(template: &str, min: usize) -> String {
    template.replace("{min}", &min.to_string())
}

/// Strip the characters a browser's `String.prototype.trim` strips, which
/// include the byte order mark on top of Unicode whitespace.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Check name, email and message in that order, stopping at the first failure.
///
/// Message length is measured in UTF-16 code units, matching the length the
/// browser reports for the same text.
///
/// # Errors
///
/// Returns the first check that failed.
pub fn validate(
    values: &FieldValues,
    min_message_len: usize,
) -> Result<ContactMessage, ValidationError> {
    let name = trim_field(&values.name);
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let email = trim_field(&values.email);
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let message = trim_field(&values.message);
    let len = message.encode_utf16().count();
    if len < min_message_len {
        return Err(ValidationError::TooShort {
            len,
            min: min_message_len,
        });
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: usize = 10;

    fn check(name: &str, email: &str, message: &str) -> Result<ContactMessage, ValidationError> {
        validate(&FieldValues::new(name, email, message), MIN)
    }

    #[test]
    fn blank_names_fail_first() {
        for name in ["", " ", "\t\n", "   \u{a0} "] {
            assert_eq!(check(name, "bad", ""), Err(ValidationError::EmptyName), "{name:?}");
        }
    }

    #[test]
    fn email_shape() {
        for bad in ["", "a@b", "a@b.", "@b.c", "a b@c.d", "a@@b.c", "ab.c", "a@b c.d"] {
            assert!(!is_valid_email(bad), "{bad:?} should fail");
        }
        for good in ["a@b.c", "ana@example.com", "x.y@sub.domain.org"] {
            assert!(is_valid_email(good), "{good:?} should pass");
        }
        assert_eq!(
            check("Ana", "a@b", "long enough text"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert!(check("Ana", "  a@b.c  ", "long enough text").is_ok());
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(
            check("Ana", "a@b.c", "123456789"),
            Err(ValidationError::TooShort { len: 9, min: MIN })
        );
        assert!(check("Ana", "a@b.c", "1234567890").is_ok());
        assert_eq!(
            check("Ana", "a@b.c", "   123456789   ").unwrap_err().field(),
            Field::Message
        );
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(
            check("\u{feff}", "a@b.c", "long enough text"),
            Err(ValidationError::EmptyName)
        );
        let msg = check("\u{feff} Ana\u{feff}", "a@b.c\u{feff}", "long enough text").unwrap();
        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.email, "a@b.c");
    }

    #[test]
    fn message_length_counts_utf16_units() {
        assert!(check("Ana", "a@b.c", "😀😀😀😀😀").is_ok());
        assert_eq!(
            check("Ana", "a@b.c", "😀😀😀😀"),
            Err(ValidationError::TooShort { len: 8, min: MIN })
        );
        assert_eq!(
            check("Ana", "a@b.c", "ação ação"),
            Err(ValidationError::TooShort { len: 9, min: MIN })
        );
    }

    #[test]
    fn success_yields_trimmed_values() {
        let msg = check("  Ana ", " ana@example.com", " Hello there, this works ").unwrap();
        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.email, "ana@example.com");
        assert_eq!(msg.message, "Hello there, this works");
    }

    #[test]
    fn messages_fill_minimum() {
        let messages = Messages::default();
        let err = ValidationError::TooShort { len: 3, min: 12 };
        assert!(err.feedback_message(&messages).contains("12"));
        assert!(!err.validity_message(&messages).contains("{min}"));
        assert_eq!(ValidationError::EmptyName.field(), Field::Name);
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
        assert_eq!(
            ValidationError::InvalidEmail.validity_message(&messages),
            "E-mail inválido."
        );
    }
}
