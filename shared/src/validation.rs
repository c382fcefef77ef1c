//! Form field validation
//!
//! Patterns and limits used by the intake and account forms, plus the
//! bridge from `validator` errors into [`AppError`] field details.
//!
//! | Field | Rule |
//! |-------|------|
//! | email | [`EMAIL_RE`], at most 63 chars |
//! | phone | [`PHONE_RE`], at most 15 chars |
//! | username | [`USERNAME_RE`], at most 150 chars |

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::error::AppError;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 63;
pub const MAX_PHONE_LEN: usize = 15;
pub const MAX_DATE_LEN: usize = 10;
pub const MAX_TIME_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 250;
pub const MAX_SUBJECT_LEN: usize = 100;
pub const MAX_USERNAME_LEN: usize = 150;
pub const MAX_PASSWORD_LEN: usize = 128;

/// Largest party size a reservation accepts
pub const MAX_PERSONS: i64 = 32767;

pub const EMAIL_MESSAGE: &str = "Standard e-mail form";
pub const PHONE_MESSAGE: &str = "Phone in format xxx xxx xxxx";
pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Error in passwords";

/// Key under which form-wide errors are reported
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Local part: word segments joined by single `.` or `-`, starting with a
/// letter or digit. Domain: one or more `label.` followed by a lowercase TLD.
pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9_]*([.-][A-Za-z0-9_]+)*@([A-Za-z0-9]+\.)+[a-z0-9]([a-z0-9-]*[a-z0-9])?$",
    )
    .expect("email pattern compiles")
});

/// `DDD DDD DDDD` with optional `-`, `.` or space separators
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3}[- .]?){2}[0-9]{4}$").expect("phone pattern compiles")
});

/// Letters, digits and `@.+-_`
pub static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern compiles"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Rejects empty (after trim) input
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE)));
    }
    Ok(())
}

/// Party size: a positive integer no larger than [`MAX_PERSONS`]
pub fn persons(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    match value.trim().parse::<i64>() {
        Ok(n) if (1..=MAX_PERSONS).contains(&n) => Ok(()),
        Ok(_) => Err(ValidationError::new("range").with_message(Cow::Owned(format!(
            "Ensure this value is between 1 and {MAX_PERSONS}."
        )))),
        Err(_) => Err(ValidationError::new("invalid")
            .with_message(Cow::Borrowed("Enter a whole number."))),
    }
}

/// Trim, then map blank to `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut app_error = AppError::validation("Validation failed");
        for (field, list) in fields {
            for error in list {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                app_error = app_error.with_field_error(field.to_string(), message);
            }
        }
        app_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_separators() {
        for phone in ["555-555-5555", "555.555.5555", "555 555 5555", "5555555555", "555-555 5555"] {
            assert!(is_valid_phone(phone), "{phone} should be accepted");
        }
    }

    #[test]
    fn test_phone_rejects_other_shapes() {
        for phone in [
            "",
            "555-5555-555",
            "55-555-55555",
            "555--555-5555",
            "abc-def-ghij",
            "555-555-555a",
            "+1 555 555 5555",
            "555_555_5555",
        ] {
            assert!(!is_valid_phone(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn test_email_accepts() {
        for email in ["a.b@c.de", "a@b.co", "john_doe@mail.example.com", "ab-cd@x.org", "user1@host.io"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_email_rejects() {
        for email in [
            "",
            "@c.de",
            "a@@c.de",
            "a.b.c.de",
            "a@cde",
            "a@c.",
            "_a@c.de",
            "a..b@c.de",
            "a b@c.de",
            "a@c.DE",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_username_pattern() {
        assert!(USERNAME_RE.is_match("chef.mario+1@site"));
        assert!(USERNAME_RE.is_match("line_cook-2"));
        assert!(!USERNAME_RE.is_match("two words"));
        assert!(!USERNAME_RE.is_match("semi;colon"));
    }

    #[test]
    fn test_persons() {
        assert!(persons("2").is_ok());
        assert!(persons(" 32767 ").is_ok());
        assert!(persons("0").is_err());
        assert!(persons("-3").is_err());
        assert!(persons("32768").is_err());
        assert!(persons("two").is_err());
        assert_eq!(
            persons("").unwrap_err().message.unwrap(),
            REQUIRED_MESSAGE
        );
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  hi ".into())), Some("hi".into()));
        assert_eq!(normalize_optional(Some("   ".into())), None);
        assert_eq!(normalize_optional(None), None);
    }
}
