//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;

/// Errors shared by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] santalena_site::db::RepositoryError),

    /// Auth/hashing error.
    #[error("Auth error: {0}")]
    Auth(#[from] santalena_site::services::auth::AuthError),

    /// Admin account not found.
    #[error("No admin account named '{0}'")]
    AdminNotFound(String),
}

/// Connect to the site database using the same environment variables as the
/// server (`SANTALENA_DATABASE_URL`, then `DATABASE_URL`, then the default
/// local file).
pub async fn connect() -> Result<SqlitePool, CommandError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("SANTALENA_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .unwrap_or_else(|_| "sqlite://santalena.db?mode=rwc".to_string());

    let pool = santalena_site::db::create_pool(&SecretString::from(url)).await?;
    Ok(pool)
}
