//! Santalena site library.
//!
//! Backend for the practice's marketing site: public content endpoints,
//! the contact pipeline, and the session-authenticated admin API. The
//! router is built here as a library so integration tests can drive it
//! without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application router.
///
/// Session storage must already be migrated (see
/// [`middleware::migrate_session_store`]); this function only wires
/// routes and layers.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.pool(), state.config());
    let uploads_dir = state.config().uploads_dir.clone();

    routes::routes()
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
