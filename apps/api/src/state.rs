use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generation client behind its trait. Production wires `OpenAiClient`
    /// at startup; tests substitute deterministic fakes.
    pub llm: Arc<dyn TextGenerator>,
}
