//! CLI command implementations.

pub mod verify;
