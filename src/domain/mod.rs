//! Core domain layer: dispatch entities and the process-invocation seam.
//!
//! # Modules
//!
//! - [`outcome`] - Per-attempt outcome records and batch aggregation
//! - [`runner`] - The [`runner::CommandRunner`] capability trait

pub mod outcome;
pub mod runner;
