//! Service repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use santalena_core::ServiceId;

use super::RepositoryError;
use crate::models::{NewService, Service, UpdateService};

const SERVICE_COLUMNS: &str =
    "id, title, description, icon, duration, price, active, created_at, updated_at";

/// Repository for service database operations.
pub struct ServiceRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all services, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }

    /// List only active services, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE active = 1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }

    /// Get a service by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, RepositoryError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(service)
    }

    /// Create a new service with server-assigned timestamps.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewService) -> Result<Service, RepositoryError> {
        let now = Utc::now();
        let service = sqlx::query_as::<_, Service>(&format!(
            "INSERT INTO services (title, description, icon, duration, price, active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.icon)
        .bind(&new.duration)
        .bind(&new.price)
        .bind(new.active)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(service)
    }

    /// Merge a partial update onto an existing service and refresh
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ServiceId,
        update: &UpdateService,
    ) -> Result<Service, RepositoryError> {
        let now = Utc::now();
        let service = sqlx::query_as::<_, Service>(&format!(
            "UPDATE services SET \
               title = COALESCE(?, title), \
               description = COALESCE(?, description), \
               icon = COALESCE(?, icon), \
               duration = COALESCE(?, duration), \
               price = COALESCE(?, price), \
               active = COALESCE(?, active), \
               updated_at = ? \
             WHERE id = ? \
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(update.title.as_deref())
        .bind(update.description.as_deref())
        .bind(update.icon.as_deref())
        .bind(update.duration.as_deref())
        .bind(update.price.as_deref())
        .bind(update.active)
        .bind(now)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(service)
    }

    /// Delete a service by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ServiceId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
