//! Infrastructure layer: integrations with the host operating system.

pub mod process;
