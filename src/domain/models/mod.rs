pub mod config;
pub mod resolution;
pub mod setting;

pub use config::{Config, LogFormat, LoggingConfig, ACL_FILE_PATH, CERTS_DIR};
pub use resolution::{Resolution, ResolvedSetting, ValueSource};
pub use setting::{Setting, SettingKind, SettingValue, LOGGING_SETTINGS, SETTINGS};
