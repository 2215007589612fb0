//! Shared building blocks for the user accounts workspace:
//! response types, logging setup and runtime directory checks.

pub mod types;
pub mod utils;
pub mod env;
