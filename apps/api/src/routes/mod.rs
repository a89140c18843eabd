pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::devotionals::handlers as devotionals;
use crate::errors::AppError;
use crate::generation::handlers as generation;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/options", get(catalog::handle_get_options))
        // Generation
        .route(
            "/api/generate",
            post(generation::handle_generate).fallback(method_not_allowed),
        )
        .route(
            "/api/compose",
            post(generation::handle_compose).fallback(method_not_allowed),
        )
        // Stored devotionals
        .route(
            "/api/devotional",
            post(devotionals::handle_create_devotional).fallback(method_not_allowed),
        )
        .route("/api/devotional/:id", get(devotionals::handle_get_devotional))
        .route(
            "/api/devotional/:id/text",
            get(devotionals::handle_export_text),
        )
        .route("/api/devotional/:id/share", get(devotionals::handle_share))
        .with_state(state)
}
