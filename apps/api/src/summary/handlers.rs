//! Axum route handlers for the summary API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::summary::assembler::LawSummaryResponse;
use crate::summary::generator::{generate_bill_summary, generate_law_summary};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawSummaryRequest {
    pub law_modified_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    pub bill_title: String,
}

#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /law/summary
///
/// Six model calls, one per response field. Any failure is a generic 500.
pub async fn handle_law_summary(
    State(state): State<AppState>,
    Json(request): Json<LawSummaryRequest>,
) -> Result<Json<LawSummaryResponse>, AppError> {
    if request.law_modified_content.trim().is_empty() {
        return Err(AppError::Validation(
            "lawModifiedContent cannot be empty".to_string(),
        ));
    }

    let response =
        generate_law_summary(state.model.as_ref(), &request.law_modified_content).await?;

    Ok(Json(response))
}

/// POST /bill
///
/// Legacy single-prompt summary of a bill title.
pub async fn handle_bill(
    State(state): State<AppState>,
    Json(request): Json<BillRequest>,
) -> Result<Json<BillResponse>, AppError> {
    if request.bill_title.trim().is_empty() {
        return Err(AppError::Validation("billTitle cannot be empty".to_string()));
    }

    let content = generate_bill_summary(state.model.as_ref(), &request.bill_title).await?;

    Ok(Json(BillResponse { content }))
}
