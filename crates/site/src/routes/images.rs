//! Site image route handlers.
//!
//! The public endpoint serves images per page section; the admin endpoints
//! manage the records behind a session check. The binary payloads
//! themselves live under `/uploads` and are served statically.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use santalena_core::SiteImageId;

use crate::db::SiteImageRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{NewSiteImage, UpdateSiteImage};
use crate::state::AppState;

/// List images for a page section. The special section `all` returns
/// every image.
///
/// GET /api/images/{section}
#[instrument(skip(state))]
pub async fn list_public(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse> {
    let repo = SiteImageRepository::new(state.pool());
    let images = if section == "all" {
        repo.list_all().await?
    } else {
        repo.list_by_section(&section).await?
    };
    Ok(Json(images))
}

/// List all image records.
///
/// GET /api/admin/images
#[instrument(skip(state, _admin))]
pub async fn list_admin(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let images = SiteImageRepository::new(state.pool()).list_all().await?;
    Ok(Json(images))
}

/// Get a single image record.
///
/// GET /api/admin/images/{id}
#[instrument(skip(state, _admin))]
pub async fn get_one(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<SiteImageId>,
) -> Result<impl IntoResponse> {
    let image = SiteImageRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;
    Ok(Json(image))
}

/// Create an image record.
///
/// POST /api/admin/images
#[instrument(skip(state, _admin, payload))]
pub async fn create(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<NewSiteImage>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::Validation)?;

    let image = SiteImageRepository::new(state.pool()).create(&payload).await?;

    tracing::info!(id = %image.id, section = %image.section, "Image record created");
    Ok((StatusCode::CREATED, Json(image)))
}

/// Apply a partial update to an image record.
///
/// PUT /api/admin/images/{id}
#[instrument(skip(state, _admin, payload))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<SiteImageId>,
    Json(payload): Json<UpdateSiteImage>,
) -> Result<impl IntoResponse> {
    let image = SiteImageRepository::new(state.pool())
        .update(id, &payload)
        .await?;

    tracing::info!(id = %image.id, "Image record updated");
    Ok(Json(image))
}

/// Delete an image record.
///
/// DELETE /api/admin/images/{id}
#[instrument(skip(state, _admin))]
pub async fn delete_one(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<SiteImageId>,
) -> Result<impl IntoResponse> {
    SiteImageRepository::new(state.pool()).delete(id).await?;

    tracing::info!(id = %id, "Image record deleted");
    Ok(Json(json!({ "message": "Image deleted successfully" })))
}
