//! Image upload handler.
//!
//! Accepts a single multipart field named `image`, stores the file under
//! `<uploads_dir>/images/` with a random name, and returns the public URL.
//! The record pointing at the file is created separately via the images
//! API; an upload with no subsequent record is just an orphaned file.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Upload an image file.
///
/// POST /api/admin/upload-image
#[instrument(skip(state, _admin, multipart))]
pub async fn upload_image(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut stored: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Invalid multipart body: {err}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(AppError::BadRequest(
                "No file uploaded or invalid format".to_string(),
            ));
        }

        let extension = field
            .file_name()
            .and_then(|name| std::path::Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map_or_else(|| "bin".to_string(), str::to_lowercase);

        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("Failed to read upload: {err}")))?;

        let filename = format!("{}.{extension}", Uuid::new_v4());
        stored = Some((filename, data.to_vec()));
        break;
    }

    let Some((filename, data)) = stored else {
        return Err(AppError::BadRequest(
            "No file uploaded or invalid format".to_string(),
        ));
    };

    let images_dir = state.config().uploads_dir.join("images");
    tokio::fs::create_dir_all(&images_dir)
        .await
        .map_err(|err| AppError::Internal(format!("Failed to create uploads dir: {err}")))?;

    let path = images_dir.join(&filename);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|err| AppError::Internal(format!("Failed to store upload: {err}")))?;

    let image_url = format!("/uploads/images/{filename}");
    tracing::info!(filename = %filename, bytes = data.len(), "Image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Image uploaded successfully",
            "imageUrl": image_url,
            "filename": filename,
        })),
    ))
}
