//! Admin authentication route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, FieldError, Result};
use crate::middleware::OptionalAdminAuth;
use crate::middleware::auth::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Log in as the admin.
///
/// POST /api/admin/login
#[instrument(skip(state, session, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let mut errors = Vec::new();
    if payload.username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }
    if payload.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let admin = state.auth().login(&payload.username, &payload.password).await?;

    let current = CurrentAdmin {
        id: admin.id,
        username: admin.username.clone(),
    };
    set_current_admin(&session, &current)
        .await
        .map_err(crate::services::auth::AuthError::Session)?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(json!({
        "message": "Login successful",
        "admin": {
            "id": admin.id,
            "username": admin.username,
        },
    })))
}

/// Log out and destroy the session.
///
/// POST /api/admin/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_current_admin(&session)
        .await
        .map_err(crate::services::auth::AuthError::Session)?;

    Ok(Json(json!({ "message": "Logout successful" })))
}

/// Report whether the caller holds a valid admin session. Always 200.
///
/// GET /api/admin/check-auth
pub async fn check_auth(OptionalAdminAuth(admin): OptionalAdminAuth) -> impl IntoResponse {
    Json(json!({ "authenticated": admin.is_some() }))
}
