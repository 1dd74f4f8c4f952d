//! DTOs for the health and ping endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Connectivity probe response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub status: &'static str,
}
