//! Database operations for the site's `SQLite` store.
//!
//! ## Tables
//!
//! - `services` - Offered massage services
//! - `site_images` - Images per page section
//! - `contact_messages` - Visitor contact submissions
//! - `admins` - The seeded admin account
//! - `tower_sessions` - Session storage (created by the session store)
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p santalena-cli -- migrate
//! ```
//! They are also applied on server startup, which is idempotent.
//!
//! Queries use the runtime `query_as` API with `FromRow` row types; `SQLite`
//! has no compile-time schema available in CI for the `query!` macros.

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod admins;
pub mod contact_messages;
pub mod services;
pub mod site_images;

pub use admins::AdminRepository;
pub use contact_messages::ContactMessageRepository;
pub use services::ServiceRepository;
pub use site_images::SiteImageRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
