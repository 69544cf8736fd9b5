//! Admin account repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::Admin;

const ADMIN_COLUMNS: &str = "id, username, password_hash, created_at";

/// Repository for admin account database operations.
pub struct AdminRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up an admin by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Admin>, RepositoryError> {
        let admin = sqlx::query_as::<_, Admin>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    /// Insert an admin, or rotate the password hash if the username already
    /// exists. Idempotent, so it is safe to run on every startup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn upsert(&self, username: &str, password_hash: &str) -> Result<Admin, RepositoryError> {
        let now = Utc::now();
        let admin = sqlx::query_as::<_, Admin>(&format!(
            "INSERT INTO admins (username, password_hash, created_at) \
             VALUES (?, ?, ?) \
             ON CONFLICT(username) DO UPDATE SET password_hash = excluded.password_hash \
             RETURNING {ADMIN_COLUMNS}"
        ))
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(admin)
    }
}
