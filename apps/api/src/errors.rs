use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::devotionals::store::StoreError;
use crate::llm_client::LlmError;
use crate::validation::Issue;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error body has the shape `{ "error": <message>, "details"?: <value> }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: &'static str,
        issues: Vec<Issue>,
    },

    #[error("Invalid devotional ID format")]
    InvalidId,

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed. Use POST instead.")]
    MethodNotAllowed,

    #[error("API key not configured on the server.")]
    MissingApiKey,

    #[error("Failed to fetch from Gemini API")]
    Upstream { status: u16, details: Value },

    #[error("Generated response contained no text")]
    EmptyGeneration,

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        AppError::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::EmptyGeneration => StatusCode::BAD_GATEWAY,
            AppError::MissingApiKey | AppError::Storage { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            LlmError::Api { status, body } => AppError::Upstream {
                status,
                details: body,
            },
            LlmError::Http(e) => AppError::Upstream {
                status: e.status().map(|s| s.as_u16()).unwrap_or(500),
                details: Value::String(e.to_string()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation { message, issues } => {
                tracing::debug!("Validation error: {issues:?}");
                json!({ "error": message, "details": issues })
            }
            AppError::Upstream { status, details } => {
                tracing::warn!("Upstream error (status {status}): {details}");
                json!({ "error": self.to_string(), "details": details })
            }
            AppError::MissingApiKey => {
                tracing::error!("Generation requested but no API key is configured");
                json!({ "error": self.to_string() })
            }
            AppError::Storage { message, source } => {
                tracing::error!("Storage error: {source}");
                json!({ "error": message, "details": source.to_string() })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({ "error": "An unexpected error occurred", "details": e.to_string() })
            }
            AppError::InvalidId
            | AppError::NotFound(_)
            | AppError::MethodNotAllowed
            | AppError::EmptyGeneration => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
