//! # Call Dispatch API
//!
//! HTTP API that triggers outbound call dispatch jobs through the LiveKit
//! CLI, one job per phone number, optionally in batches.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Outcome entities and the
//!   process-invocation capability trait
//! - **Application Layer** ([`application`]) - Dispatch orchestration and
//!   batch aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - Real external-process
//!   runner
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export API_PORT=5001
//!
//! # The LiveKit CLI must be on PATH; startup probes `lk --version`
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DispatchService, DispatchSettings};
    pub use crate::domain::outcome::{BatchResult, DispatchOutcome, DispatchResult};
    pub use crate::domain::runner::{CommandOutput, CommandRunner, RunnerError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
