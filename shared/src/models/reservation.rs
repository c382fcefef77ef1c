//! Reservation Request Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{self, EMAIL_RE, PHONE_RE};

/// Table reservation submitted from the main page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReservationRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-form date text as typed by the customer
    pub date_reservation: String,
    pub time_reservation: String,
    pub persons: i64,
    pub message: Option<String>,
    /// Server-set submission time (epoch millis)
    pub created_at: i64,
    pub is_processed: bool,
}

/// Raw reservation form
///
/// Every field arrives as text; `persons` is parsed after validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReservationForm {
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
        length(max = 15, message = "Ensure this value has at most 15 characters."),
        regex(path = *PHONE_RE, message = "Phone in format xxx xxx xxxx")
    )]
    pub phone: String,
    #[validate(
        custom(function = "validation::required"),
        length(max = 10, message = "Ensure this value has at most 10 characters.")
    )]
    pub date_reservation: String,
    #[validate(
        custom(function = "validation::required"),
        length(max = 10, message = "Ensure this value has at most 10 characters.")
    )]
    pub time_reservation: String,
    #[validate(custom(function = "validation::persons"))]
    pub persons: String,
    #[validate(length(max = 250, message = "Ensure this value has at most 250 characters."))]
    pub message: Option<String>,
}

impl ReservationForm {
    /// Trim every field; blank message becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_reservation: self.date_reservation.trim().to_string(),
            time_reservation: self.time_reservation.trim().to_string(),
            persons: self.persons.trim().to_string(),
            message: validation::normalize_optional(self.message),
        }
    }

    /// Convert a validated form into an insert payload
    ///
    /// Returns `None` only if `persons` does not parse, which validation
    /// already rules out.
    pub fn into_new(self) -> Option<NewReservation> {
        let persons = self.persons.parse().ok()?;
        Some(NewReservation {
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_reservation: self.date_reservation,
            time_reservation: self.time_reservation,
            persons,
            message: self.message,
        })
    }
}

/// Validated reservation ready for insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_reservation: String,
    pub time_reservation: String,
    pub persons: i64,
    pub message: Option<String>,
}
