//! Domain layer for deployment configuration
//!
//! This module contains the configuration model, the setting catalogue and
//! the port the resolver reads from.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
