//! Data Transfer Objects for API requests and responses.

pub mod call;
pub mod health;
