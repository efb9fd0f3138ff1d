use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::watchlist::WatchlistStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend for every flow. `LlmClient` in production.
    pub generator: Arc<dyn TextGenerator>,
    pub watchlists: WatchlistStore,
    pub config: Config,
}
