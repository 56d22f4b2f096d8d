// ABOUTME: Route definitions for the textlog HTTP API.
// ABOUTME: Assembles the single /log route into an Axum Router with shared state and request tracing.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router. Paths other than /log fall through to
/// the router's default 404. Records have no size cap, so axum's default
/// request body limit is lifted on /log.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/log",
            get(api::log::read_log)
                .post(api::log::append_record)
                .fallback(api::log::method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
