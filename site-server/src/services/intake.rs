//! Request intake
//!
//! Reservation and contact submissions from the main page form. Both are
//! validated in full before anything is written.

use shared::models::{ContactForm, ContactRequest, ReservationForm, ReservationRequest};
use shared::util::now_millis;
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::repository::{contact, reservation};
use crate::utils::{AppError, AppResult};

/// A main page form post
#[derive(Debug, Clone)]
pub enum Submission {
    Reservation(ReservationForm),
    Contact(ContactForm),
}

impl Submission {
    /// Decode a urlencoded body; a `subject` key marks a contact request
    pub fn from_urlencoded(body: &[u8]) -> AppResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::invalid_request(format!("Malformed form body: {e}")))?;

        if pairs.iter().any(|(key, _)| key == "subject") {
            let form = serde_urlencoded::from_bytes(body)
                .map_err(|e| AppError::invalid_request(format!("Malformed contact form: {e}")))?;
            Ok(Self::Contact(form))
        } else {
            let form = serde_urlencoded::from_bytes(body).map_err(|e| {
                AppError::invalid_request(format!("Malformed reservation form: {e}"))
            })?;
            Ok(Self::Reservation(form))
        }
    }
}

/// What a successful submission stored
#[derive(Debug, Clone)]
pub enum Submitted {
    Reservation(ReservationRequest),
    Contact(ContactRequest),
}

pub async fn submit(pool: &SqlitePool, submission: Submission) -> AppResult<Submitted> {
    match submission {
        Submission::Reservation(form) => submit_reservation(pool, form)
            .await
            .map(Submitted::Reservation),
        Submission::Contact(form) => submit_contact(pool, form).await.map(Submitted::Contact),
    }
}

/// Validate and store a reservation as unprocessed
pub async fn submit_reservation(
    pool: &SqlitePool,
    form: ReservationForm,
) -> AppResult<ReservationRequest> {
    let form = form.normalized();
    form.validate()?;

    let data = form
        .into_new()
        .ok_or_else(|| AppError::validation("Invalid party size"))?;
    let stored = reservation::create(pool, &data, now_millis()).await?;

    tracing::info!(
        reservation_id = stored.id,
        persons = stored.persons,
        "Reservation request received"
    );
    Ok(stored)
}

/// Validate and store a contact request as unprocessed
pub async fn submit_contact(pool: &SqlitePool, form: ContactForm) -> AppResult<ContactRequest> {
    let form = form.normalized();
    form.validate()?;

    let stored = contact::create(pool, &form.into_new(), now_millis()).await?;

    tracing::info!(contact_id = stored.id, "Contact request received");
    Ok(stored)
}
