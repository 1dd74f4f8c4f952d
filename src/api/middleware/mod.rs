//! HTTP middleware for request processing and recovery.

pub mod catch_panic;
pub mod cors;
pub mod tracing;
