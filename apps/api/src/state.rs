use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The model every prompt goes through. `GeminiClient` in production.
    pub model: Arc<dyn TextModel>,
    pub config: Config,
}
