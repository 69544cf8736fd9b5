//! Session middleware configuration.
//!
//! Sets up `SQLite`-backed sessions using tower-sessions.

use sqlx::SqlitePool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "santalena_session";

/// Session expiry time in seconds (24 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with `SQLite` store.
///
/// # Arguments
///
/// * `pool` - `SQLite` connection pool
/// * `config` - Site configuration (for the cookie security flag)
#[must_use]
pub fn create_session_layer(
    pool: &SqlitePool,
    config: &SiteConfig,
) -> SessionManagerLayer<SqliteStore> {
    // The session table is created by `migrate_session_store` at startup
    let store = SqliteStore::new(pool.clone());

    // Secure cookies only when served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Create the session table if it does not exist.
///
/// Must run before the server starts accepting requests.
///
/// # Errors
///
/// Returns an error if the session store migration fails.
pub async fn migrate_session_store(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    SqliteStore::new(pool.clone()).migrate().await
}
