use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "AI 서버가 실행 중입니다." }))
}

/// GET /health
/// Returns a simple status object with service version and model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "law-summary-api",
        "model": state.config.model,
    }))
}
