use std::sync::Arc;

use crate::llm::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The completion model behind the analyzer. `None` when no credential is
    /// configured — the endpoint answers `NOT_CONFIGURED` per request instead
    /// of the process refusing to start.
    pub model: Option<Arc<dyn CompletionModel>>,
}
