//! Contact Request Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{self, EMAIL_RE};

/// "Contact us" message submitted from the main page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: Option<String>,
    pub created_at: i64,
    pub is_processed: bool,
}

/// Raw contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(
        custom(function = "validation::required"),
        length(max = 50, message = "Ensure this value has at most 50 characters.")
    )]
    pub name: String,
    #[validate(
        custom(function = "validation::required"),
        length(max = 63, message = "Ensure this value has at most 63 characters."),
        regex(path = *EMAIL_RE, message = "Standard e-mail form")
    )]
    pub email: String,
    #[validate(
        custom(function = "validation::required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub subject: String,
    #[validate(length(max = 250, message = "Ensure this value has at most 250 characters."))]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: validation::normalize_optional(self.message),
        }
    }

    pub fn into_new(self) -> NewContact {
        NewContact {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        }
    }
}

/// Validated contact request ready for insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::validation::{EMAIL_MESSAGE, REQUIRED_MESSAGE};

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@mail.es".into(),
            subject: "Private dinner".into(),
            message: Some("Twelve guests next Friday".into()),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_bad_email() {
        let form = ContactForm {
            email: "ana.mail.es".into(),
            ..valid_form()
        };
        let err: AppError = form.validate().unwrap_err().into();
        assert_eq!(err.field_messages("email"), vec![EMAIL_MESSAGE.to_string()]);
    }

    #[test]
    fn test_subject_required() {
        let form = ContactForm {
            subject: "   ".into(),
            ..valid_form()
        };
        let err: AppError = form.normalized().validate().unwrap_err().into();
        assert_eq!(err.field_messages("subject"), vec![REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_message_limit() {
        let form = ContactForm {
            message: Some("m".repeat(251)),
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }
}
