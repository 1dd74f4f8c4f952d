//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `GET  /ping`        - Connectivity probe (public)
//! - `POST /call`        - Single call dispatch (public)
//! - `POST /call/batch`  - Batch call dispatch (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Converts handler panics into JSON 500 responses
//! - **CORS** - Permissive, for all routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{catch_panic, cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
        .layer(catch_panic::layer())
        .layer(cors::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
