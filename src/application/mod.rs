//! Application layer: business logic over the domain seams.

pub mod services;
