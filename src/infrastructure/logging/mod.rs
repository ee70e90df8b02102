//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or human-readable formatting
//! - Level from configuration, refined by `RUST_LOG`

pub mod logger;

pub use logger::LoggerImpl;
