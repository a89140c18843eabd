//! Axum route handlers for stored devotionals.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::devotionals::export::{render_plain_text, share_payload, SharePayload};
use crate::devotionals::validation::validate_new_devotional;
use crate::errors::AppError;
use crate::models::devotional::DevotionalRow;
use crate::state::AppState;

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("valid regex")
});

#[derive(Debug, Serialize)]
pub struct CreateDevotionalResponse {
    pub success: bool,
    pub devotional: DevotionalRow,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DevotionalResponse {
    pub devotional: DevotionalRow,
}

/// Accepts only the hyphenated 8-4-4-4-12 form; other UUID spellings are rejected.
pub fn parse_devotional_id(raw: &str) -> Result<Uuid, AppError> {
    if !UUID_RE.is_match(raw) {
        return Err(AppError::InvalidId);
    }
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId)
}

async fn load(state: &AppState, raw_id: &str) -> Result<DevotionalRow, AppError> {
    let id = parse_devotional_id(raw_id)?;
    state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| AppError::storage("Failed to load devotional", e))?
        .ok_or_else(|| AppError::NotFound("Devotional not found".to_string()))
}

/// POST /api/devotional
///
/// Validates and stores a devotional. The store assigns the id.
pub async fn handle_create_devotional(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateDevotionalResponse>, AppError> {
    let new = validate_new_devotional(&body).map_err(|issues| AppError::Validation {
        message: "Invalid devotional data",
        issues,
    })?;

    let devotional = state
        .store
        .create(new)
        .await
        .map_err(|e| AppError::storage("Failed to save devotional", e))?;

    info!("Saved devotional {} (theme: {})", devotional.id, devotional.theme);

    Ok(Json(CreateDevotionalResponse {
        success: true,
        id: devotional.id,
        devotional,
    }))
}

/// GET /api/devotional/:id
pub async fn handle_get_devotional(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DevotionalResponse>, AppError> {
    let devotional = load(&state, &id).await?;
    Ok(Json(DevotionalResponse { devotional }))
}

/// GET /api/devotional/:id/text
///
/// Plain-text rendering served as a downloadable attachment.
pub async fn handle_export_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let devotional = load(&state, &id).await?;
    let disposition = format!("attachment; filename=\"devotional-{}.txt\"", devotional.id);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_plain_text(&devotional),
    ))
}

/// GET /api/devotional/:id/share
///
/// Share URL, social links and JSON-LD article data.
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SharePayload>, AppError> {
    let devotional = load(&state, &id).await?;
    Ok(Json(share_payload(&devotional, &state.config.site_url)))
}
