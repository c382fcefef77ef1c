//! Account Model

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{self, PASSWORD_MISMATCH_MESSAGE, USERNAME_RE};

/// Role that unlocks the manager dashboard
pub const MANAGER_ROLE: &str = "manager";

/// True iff the role set grants manager access
pub fn is_manager(roles: &BTreeSet<String>) -> bool {
    roles.contains(MANAGER_ROLE)
}

/// Account (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub created_at: i64,
}

/// Registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
pub struct RegistrationForm {
    #[validate(
        custom(function = "validation::required"),
        length(max = 150, message = "Ensure this value has at most 150 characters."),
        regex(
            path = *USERNAME_RE,
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    pub username: String,
    #[validate(
        custom(function = "validation::required"),
        length(max = 128, message = "Ensure this value has at most 128 characters.")
    )]
    pub password: String,
    #[validate(custom(function = "validation::required"))]
    pub password2: String,
}

impl RegistrationForm {
    /// Usernames are trimmed; passwords are taken verbatim
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            ..self
        }
    }
}

fn passwords_match(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.password != form.password2 {
        return Err(ValidationError::new("password_mismatch")
            .with_message(Cow::Borrowed(PASSWORD_MISMATCH_MESSAGE)));
    }
    Ok(())
}

/// Login form
///
/// `next` may also arrive in the query string; the query value wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

/// Account info returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredAccount {
    pub id: i64,
    pub username: String,
}
