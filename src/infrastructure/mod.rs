//! Infrastructure layer module
//!
//! This module contains the adapters around the domain:
//! - Environment sources (process environment, in-memory map)
//! - Configuration resolution
//! - Logging infrastructure

pub mod config;
pub mod logging;
