//! Port trait definitions (Hexagonal Architecture)
//!
//! - Environment: named-setting lookups consumed by the configuration resolver
//!
//! Adapters live in `infrastructure::config`.

pub mod environment;

pub use environment::Environment;
