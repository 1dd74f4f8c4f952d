//! Handlers for the health and ping endpoints.

use axum::Json;

use crate::api::dto::health::{HealthResponse, PingResponse};

/// Returns service identity and health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "Ahoum Facilitator Onboarding API"
/// }
/// ```
///
/// The service has no backing stores to probe; reaching the handler at all
/// means it is healthy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Ahoum Facilitator Onboarding API",
    })
}

/// Basic connectivity probe.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response
///
/// ```json
/// {
///   "message": "pong",
///   "status": "ok"
/// }
/// ```
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        status: "ok",
    })
}
