pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::summary::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/law/summary", post(handlers::handle_law_summary))
        // Legacy single-prompt endpoint
        .route("/bill", post(handlers::handle_bill))
        .with_state(state)
}
