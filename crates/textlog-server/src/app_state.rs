// ABOUTME: Shared application state for the textlog HTTP server.
// ABOUTME: Holds the LogStore constructed once at startup and handed to every handler.

use std::sync::Arc;

use textlog_store::LogStore;

/// Shared application state accessible by all Axum handlers.
#[derive(Debug)]
pub struct AppState {
    pub store: LogStore,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: LogStore) -> Self {
        Self { store }
    }
}
