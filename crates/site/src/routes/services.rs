//! Service route handlers.
//!
//! The public endpoint lists only active services; the admin endpoints
//! expose full CRUD behind a session check.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use santalena_core::ServiceId;

use crate::db::ServiceRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{NewService, UpdateService};
use crate::state::AppState;

/// List active services for the public site.
///
/// GET /api/services
#[instrument(skip(state))]
pub async fn list_public(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let services = ServiceRepository::new(state.pool()).list_active().await?;
    Ok(Json(services))
}

/// List all services, including inactive ones.
///
/// GET /api/admin/services
#[instrument(skip(state, _admin))]
pub async fn list_admin(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let services = ServiceRepository::new(state.pool()).list_all().await?;
    Ok(Json(services))
}

/// Get a single service.
///
/// GET /api/admin/services/{id}
#[instrument(skip(state, _admin))]
pub async fn get_one(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
) -> Result<impl IntoResponse> {
    let service = ServiceRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
    Ok(Json(service))
}

/// Create a service.
///
/// POST /api/admin/services
#[instrument(skip(state, _admin, payload))]
pub async fn create(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<NewService>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::Validation)?;

    let service = ServiceRepository::new(state.pool()).create(&payload).await?;

    tracing::info!(id = %service.id, title = %service.title, "Service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// Apply a partial update to a service.
///
/// PUT /api/admin/services/{id}
#[instrument(skip(state, _admin, payload))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
    Json(payload): Json<UpdateService>,
) -> Result<impl IntoResponse> {
    let service = ServiceRepository::new(state.pool())
        .update(id, &payload)
        .await?;

    tracing::info!(id = %service.id, "Service updated");
    Ok(Json(service))
}

/// Delete a service.
///
/// DELETE /api/admin/services/{id}
#[instrument(skip(state, _admin))]
pub async fn delete_one(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
) -> Result<impl IntoResponse> {
    ServiceRepository::new(state.pool()).delete(id).await?;

    tracing::info!(id = %id, "Service deleted");
    Ok(Json(json!({ "message": "Service deleted successfully" })))
}
