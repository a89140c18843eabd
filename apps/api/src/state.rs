use std::sync::Arc;

use crate::config::Config;
use crate::devotionals::store::DevotionalStore;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable devotional store. PostgreSQL when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn DevotionalStore>,
    pub config: Config,
}
