use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// The only message clients ever see on failure. Causes are logged server-side.
pub const GENERIC_FAILURE_DETAIL: &str = "법안 요약 중 오류가 발생했습니다.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Model returned an empty {0}")]
    EmptyOutput(&'static str),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant collapses to the same client-visible 500.
        match &self {
            AppError::Validation(msg) => tracing::error!("Validation error: {msg}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::EmptyOutput(field) => tracing::error!("Model returned an empty {field}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({ "detail": GENERIC_FAILURE_DETAIL }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
