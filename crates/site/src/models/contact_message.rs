//! Contact form submissions from site visitors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use santalena_core::{ContactMessageId, Email};

use crate::error::FieldError;

/// Minimum length of a visitor's name.
const MIN_NAME_LENGTH: usize = 2;
/// Minimum length of a phone number.
const MIN_PHONE_LENGTH: usize = 10;
/// Minimum length of the free-text message.
const MIN_MESSAGE_LENGTH: usize = 10;

/// A persisted contact message.
///
/// Created only by public submission; the only later mutation is flipping
/// `read` when the admin opens it. Messages are never deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Service-of-interest code selected in the form (e.g. `relaxing`).
    pub service: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for a contact form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl NewContactMessage {
    /// Validate the submission, reporting every failing constraint.
    ///
    /// Mirrors the form schema: name >= 2 chars, syntactically valid email,
    /// phone >= 10 chars, a selected service, message >= 10 chars.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per failing field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < MIN_NAME_LENGTH {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at least {MIN_NAME_LENGTH} characters."),
            ));
        }
        if Email::parse(self.email.trim()).is_err() {
            errors.push(FieldError::new(
                "email",
                "Please enter a valid email address.",
            ));
        }
        if self.phone.trim().chars().count() < MIN_PHONE_LENGTH {
            errors.push(FieldError::new(
                "phone",
                "Please enter a valid phone number.",
            ));
        }
        if self.service.trim().is_empty() {
            errors.push(FieldError::new("service", "Please select a service."));
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LENGTH {
            errors.push(FieldError::new(
                "message",
                format!("Message must be at least {MIN_MESSAGE_LENGTH} characters."),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
