//! mqttrest - deployment configuration for the MQTT REST certificate service
//!
//! Resolves the service's settings (certificate-issuance API URL, CA name,
//! key length, broker host, ACL and certificate paths) from the process
//! environment, with typed coercion and documented defaults.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration model, setting catalogue, errors
//! - **Infrastructure Layer** (`infrastructure`): environment sources, resolver, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use mqttrest::{ConfigLoader, MapEnvironment};
//!
//! let env = MapEnvironment::new().with("MQTTREST_KEY_LENGHT", "4096");
//! let config = ConfigLoader::load_from(&env)?;
//! assert_eq!(config.key_length(), 4096);
//! assert_eq!(config.ca_name(), "IOTmidCA");
//! # Ok::<(), mqttrest::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, LogFormat, LoggingConfig, Resolution, ResolvedSetting, Setting, SettingKind,
    ValueSource, ACL_FILE_PATH, CERTS_DIR,
};
pub use domain::ports::Environment;
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{ConfigLoader, MapEnvironment, ProcessEnvironment};
