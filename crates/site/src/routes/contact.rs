//! Contact form route handlers.
//!
//! Public submissions are validated, persisted, and then a notification
//! email is sent on a spawned task. Email failure is logged and never
//! surfaced to the visitor; the message is already stored.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use santalena_core::ContactMessageId;

use crate::db::ContactMessageRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::NewContactMessage;
use crate::state::AppState;

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(state, payload), fields(service = %payload.service))]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<NewContactMessage>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::Validation)?;

    let message = ContactMessageRepository::new(state.pool())
        .create(&payload)
        .await?;

    tracing::info!(id = %message.id, "Contact message received");

    // Best-effort notification; the submission already succeeded
    if let Some(notifier) = state.notifier() {
        let notifier = notifier.clone();
        let contact = message.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.notify_contact(&contact).await {
                tracing::warn!(id = %contact.id, error = %err, "Contact notification failed");
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Message received successfully",
            "id": message.id,
        })),
    ))
}

/// List all contact messages, newest first.
///
/// GET /api/admin/contact-messages
#[instrument(skip(state, _admin))]
pub async fn list_admin(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let messages = ContactMessageRepository::new(state.pool()).list_all().await?;
    Ok(Json(messages))
}

/// Mark a contact message as read.
///
/// PUT /api/admin/contact-messages/{id}/read
#[instrument(skip(state, _admin))]
pub async fn mark_read(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ContactMessageId>,
) -> Result<impl IntoResponse> {
    let message = ContactMessageRepository::new(state.pool())
        .mark_read(id)
        .await?;

    Ok(Json(message))
}
