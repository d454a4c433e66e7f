use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Requests are fully independent; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream completion capability. Production: `OpenAiClient`.
    /// Tests swap in a canned fake.
    pub backend: Arc<dyn CompletionBackend>,
}
