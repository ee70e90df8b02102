//! Domain errors for configuration resolution.

use thiserror::Error;

/// Errors raised while resolving or validating configuration.
///
/// Every variant is fatal at startup: callers surface it and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A present value could not be coerced to its declared type
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidConfigValue {
        /// Environment key of the setting
        key: String,
        /// Raw value as read
        value: String,
        /// Why coercion failed
        reason: String,
    },

    /// Log level outside trace/debug/info/warn/error
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Log format other than json/pretty
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

impl ConfigError {
    pub(crate) fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Environment key (or field name) the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidConfigValue { key, .. } => Some(key),
            Self::InvalidLogLevel(_) | Self::InvalidLogFormat(_) => None,
        }
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
