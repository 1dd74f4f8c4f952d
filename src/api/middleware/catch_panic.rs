//! Panic recovery middleware.
//!
//! Outermost safety net: a panicking handler becomes a well-formed
//! `{"success": false, "error": "Internal server error: ..."}` 500 response
//! instead of a closed connection.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

/// Creates the panic recovery middleware.
pub fn layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    let body = json!({
        "success": false,
        "error": format!("Internal server error: {}", detail),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
