//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into dispatch operations and formats responses
//! according to the service's JSON envelopes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, CORS, and panic recovery middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
