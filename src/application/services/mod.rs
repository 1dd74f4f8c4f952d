//! Application services.

pub mod dispatch_service;

pub use dispatch_service::{DispatchService, DispatchSettings};
