//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::SiteConfig;
use crate::services::auth::{AuthError, AuthService};
use crate::services::email::ContactNotifier;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: SqlitePool,
    auth: AuthService,
    notifier: Option<ContactNotifier>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The notifier is `None` when SMTP credentials are not configured;
    /// contact submissions then skip the email step.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth service cannot initialize.
    pub fn new(
        config: SiteConfig,
        pool: SqlitePool,
        notifier: Option<ContactNotifier>,
    ) -> Result<Self, AuthError> {
        let auth = AuthService::new(pool.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                auth,
                notifier,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get the contact notifier, if email is configured.
    #[must_use]
    pub fn notifier(&self) -> Option<&ContactNotifier> {
        self.inner.notifier.as_ref()
    }
}
