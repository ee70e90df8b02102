//! Configuration management infrastructure
//!
//! Environment-driven configuration:
//! - Environment sources (process, in-memory)
//! - Typed coercion with documented defaults
//! - Provenance of each resolved value

pub mod env;
pub mod loader;

pub use env::{MapEnvironment, ProcessEnvironment};
pub use loader::ConfigLoader;
