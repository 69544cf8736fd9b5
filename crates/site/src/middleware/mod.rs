//! Middleware for the site server.

pub mod auth;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth};
pub use session::{SESSION_COOKIE_NAME, create_session_layer, migrate_session_store};
