// ABOUTME: HTTP server for textlog, exposing the shared append-only log on a single route.
// ABOUTME: Uses Axum with a LogStore in shared state; POST appends a record, GET streams the log.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use app_state::{AppState, SharedState};
pub use config::{DEFAULT_BIND, DEFAULT_PORT, DEFAULT_STORAGE_DIR, TextlogConfig};
pub use error::LogError;
pub use routes::create_router;
pub use server::{StartupError, run, serve, shutdown_signal};
