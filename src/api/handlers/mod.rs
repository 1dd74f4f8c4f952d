//! HTTP request handlers.

pub mod call;
pub mod health;

pub use call::{batch_call_handler, call_handler};
pub use health::{health_handler, ping_handler};
