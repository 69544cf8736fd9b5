//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (DB ping)
//!
//! # Public
//! GET  /api/services               - Active services
//! GET  /api/images/{section}       - Images for a section ("all" for every image)
//! POST /api/contact                - Contact form submission
//!
//! # Auth
//! POST /api/admin/login            - Admin login
//! POST /api/admin/logout           - Admin logout
//! GET  /api/admin/check-auth       - Session status (always 200)
//!
//! # Admin (session required)
//! GET    /api/admin/services           - All services
//! POST   /api/admin/services           - Create service
//! GET    /api/admin/services/{id}      - Get service
//! PUT    /api/admin/services/{id}      - Update service (partial)
//! DELETE /api/admin/services/{id}      - Delete service
//! GET    /api/admin/images             - All images
//! POST   /api/admin/images             - Create image record
//! GET    /api/admin/images/{id}        - Get image record
//! PUT    /api/admin/images/{id}        - Update image record (partial)
//! DELETE /api/admin/images/{id}        - Delete image record
//! POST   /api/admin/upload-image       - Multipart image upload
//! GET    /api/admin/contact-messages   - All contact messages
//! PUT    /api/admin/contact-messages/{id}/read - Mark message read
//! ```

pub mod auth;
pub mod contact;
pub mod health;
pub mod images;
pub mod services;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Maximum upload body size (5 MiB), matching the front end's limit.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Create the public API routes router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(services::list_public))
        .route("/images/{section}", get(images::list_public))
        .route("/contact", post(contact::submit))
}

/// Create the admin routes router (auth endpoints plus protected CRUD).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/check-auth", get(auth::check_auth))
        .route(
            "/services",
            get(services::list_admin).post(services::create),
        )
        .route(
            "/services/{id}",
            get(services::get_one)
                .put(services::update)
                .delete(services::delete_one),
        )
        .route("/images", get(images::list_admin).post(images::create))
        .route(
            "/images/{id}",
            get(images::get_one)
                .put(images::update)
                .delete(images::delete_one),
        )
        .route(
            "/upload-image",
            post(upload::upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/contact-messages", get(contact::list_admin))
        .route("/contact-messages/{id}/read", put(contact::mark_read))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .nest("/api", public_routes())
        .nest("/api/admin", admin_routes())
}
