//! Contact message repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use santalena_core::ContactMessageId;

use super::RepositoryError;
use crate::models::{ContactMessage, NewContactMessage};

const MESSAGE_COLUMNS: &str = "id, name, email, phone, service, message, read, created_at";

/// Repository for contact message database operations.
pub struct ContactMessageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContactMessageRepository<'a> {
    /// Create a new contact message repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a visitor submission as unread.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewContactMessage) -> Result<ContactMessage, RepositoryError> {
        let now = Utc::now();
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            "INSERT INTO contact_messages (name, email, phone, service, message, read, created_at) \
             VALUES (?, ?, ?, ?, ?, 0, ?) \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(new.name.trim())
        .bind(new.email.trim())
        .bind(new.phone.trim())
        .bind(new.service.trim())
        .bind(new.message.trim())
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// List all messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let messages = sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM contact_messages \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    /// Mark a message as read. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the message doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn mark_read(
        &self,
        id: ContactMessageId,
    ) -> Result<ContactMessage, RepositoryError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            "UPDATE contact_messages SET read = 1 WHERE id = ? \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(message)
    }
}
