//! `bizpage` HTTP server.
//!
//! Wires the sheet source, the record resolver and the HTML templates into
//! an Axum router. Serves the landing page at `/`, the simulated contact
//! form at `/dang-ky`, and a liveness probe at `/health`.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Every page render fetches the sheet; cap how many run at once.
    let page_routes = routes::landing::router()
        .layer(ConcurrencyLimitLayer::new(state.max_concurrent_renders));

    Router::new()
        .merge(page_routes)
        .merge(routes::sys::router())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
