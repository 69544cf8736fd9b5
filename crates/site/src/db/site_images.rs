//! Site image repository for database operations.

use chrono::Utc;
use sqlx::SqlitePool;

use santalena_core::SiteImageId;

use super::RepositoryError;
use crate::models::{NewSiteImage, SiteImage, UpdateSiteImage};

const IMAGE_COLUMNS: &str = "id, section, image_url, title, description, updated_at";

/// Repository for site image database operations.
pub struct SiteImageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SiteImageRepository<'a> {
    /// Create a new site image repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all images, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<SiteImage>, RepositoryError> {
        let images = sqlx::query_as::<_, SiteImage>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM site_images ORDER BY updated_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(images)
    }

    /// List images for one page section, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_section(&self, section: &str) -> Result<Vec<SiteImage>, RepositoryError> {
        let images = sqlx::query_as::<_, SiteImage>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM site_images \
             WHERE section = ? \
             ORDER BY updated_at DESC, id DESC"
        ))
        .bind(section)
        .fetch_all(self.pool)
        .await?;

        Ok(images)
    }

    /// Get an image by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: SiteImageId) -> Result<Option<SiteImage>, RepositoryError> {
        let image = sqlx::query_as::<_, SiteImage>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM site_images WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(image)
    }

    /// Create a new image record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewSiteImage) -> Result<SiteImage, RepositoryError> {
        let now = Utc::now();
        let image = sqlx::query_as::<_, SiteImage>(&format!(
            "INSERT INTO site_images (section, image_url, title, description, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(&new.section)
        .bind(&new.image_url)
        .bind(new.title.as_deref())
        .bind(new.description.as_deref())
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(image)
    }

    /// Merge a partial update onto an existing image and refresh
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the image doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: SiteImageId,
        update: &UpdateSiteImage,
    ) -> Result<SiteImage, RepositoryError> {
        let now = Utc::now();
        let image = sqlx::query_as::<_, SiteImage>(&format!(
            "UPDATE site_images SET \
               section = COALESCE(?, section), \
               image_url = COALESCE(?, image_url), \
               title = COALESCE(?, title), \
               description = COALESCE(?, description), \
               updated_at = ? \
             WHERE id = ? \
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(update.section.as_deref())
        .bind(update.image_url.as_deref())
        .bind(update.title.as_deref())
        .bind(update.description.as_deref())
        .bind(now)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(image)
    }

    /// Delete an image record by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the image doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: SiteImageId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM site_images WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
