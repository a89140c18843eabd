//! Axum route handlers for devotional generation.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::composer::{compose_devotional, ComposedDevotional};
use crate::generation::prompts::prompt_for;
use crate::generation::validation::{validate_generation_request, GenerationRequest};
use crate::state::AppState;

fn validated(body: &[u8]) -> Result<GenerationRequest, AppError> {
    validate_generation_request(body).map_err(|issues| AppError::Validation {
        message: "Invalid request data",
        issues,
    })
}

/// POST /api/generate
///
/// Builds the prompt and relays the upstream `generateContent` response body
/// unchanged. Extracting and parsing the text is the caller's job.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request = validated(&body)?;
    info!(
        "Generating devotional: theme={} audience={:?} mood={:?}",
        request.theme, request.audience, request.mood
    );

    let prompt = prompt_for(&request);
    let response = state.llm.generate_content(&prompt).await?;

    Ok(Json(response))
}

/// POST /api/compose
///
/// Generate, parse and save in one round trip. Same request body as `/api/generate`.
pub async fn handle_compose(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ComposedDevotional>, AppError> {
    let request = validated(&body)?;
    let composed = compose_devotional(&state.llm, state.store.as_ref(), request).await?;
    Ok(Json(composed))
}
