//! API route configuration.

use crate::api::handlers::{batch_call_handler, call_handler, health_handler, ping_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /health`      - Service identity and health status
/// - `GET  /ping`        - Basic connectivity probe
/// - `POST /call`        - Dispatch a single outbound call
/// - `POST /call/batch`  - Dispatch a batch of outbound calls
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
        .route("/call", post(call_handler))
        .route("/call/batch", post(batch_call_handler))
}
