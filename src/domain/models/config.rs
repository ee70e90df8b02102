use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::setting::{CA_NAME, EJBCA_URL, KAFKA_HOST, KEY_LENGTH, LOG_LEVEL};

/// Access-control list consumed by the MQTT broker. Not overridable.
pub const ACL_FILE_PATH: &str = "/opt/iot-agent/mosca/certs/access.acl";

/// Directory holding issued certificates. Not overridable.
pub const CERTS_DIR: &str = "/opt/iot-agent/mosca/certs/";

/// Deployment configuration of the MQTT REST certificate service.
///
/// Built once at startup and read-only afterwards; share it by reference
/// (or wrap it in an `Arc`) rather than rebuilding it.
///
/// Deserialization goes through [`Config::new`]: path fields in the input are
/// ignored and the invariants are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ConfigRecord")]
pub struct Config {
    /// Endpoint of the certificate-issuance service
    api_url: String,

    /// Logical name of the certificate authority
    ca_name: String,

    /// Key size in bits
    key_length: u32,

    /// `host:port` of the message broker
    broker_host: String,

    /// Path to the broker's access-control list
    acl_file_path: String,

    /// Certificate storage directory
    certs_dir: String,
}

/// Wire shape accepted when deserializing a [`Config`].
#[derive(Deserialize)]
struct ConfigRecord {
    api_url: String,
    ca_name: String,
    key_length: u32,
    broker_host: String,
}

impl TryFrom<ConfigRecord> for Config {
    type Error = ConfigError;

    fn try_from(record: ConfigRecord) -> Result<Self, Self::Error> {
        Self::new(record.api_url, record.ca_name, record.key_length, record.broker_host)
    }
}

impl Config {
    /// Build a configuration from already-coerced values.
    ///
    /// The path fields are always the fixed constants.
    pub fn new(
        api_url: impl Into<String>,
        ca_name: impl Into<String>,
        key_length: u32,
        broker_host: impl Into<String>,
    ) -> ConfigResult<Self> {
        let config = Self {
            api_url: api_url.into(),
            ca_name: ca_name.into(),
            key_length,
            broker_host: broker_host.into(),
            acl_file_path: ACL_FILE_PATH.to_string(),
            certs_dir: CERTS_DIR.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        let text_fields = [
            (EJBCA_URL.key, &self.api_url),
            (CA_NAME.key, &self.ca_name),
            (KAFKA_HOST.key, &self.broker_host),
        ];
        for (key, value) in text_fields {
            if value.is_empty() {
                return Err(ConfigError::invalid(key, value.as_str(), "must not be empty"));
            }
        }

        if self.key_length == 0 {
            return Err(ConfigError::invalid(
                KEY_LENGTH.key,
                "0",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Endpoint of the certificate-issuance service.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Logical name of the certificate authority.
    pub fn ca_name(&self) -> &str {
        &self.ca_name
    }

    /// Key size in bits, always greater than zero.
    pub const fn key_length(&self) -> u32 {
        self.key_length
    }

    /// `host:port` of the message broker.
    pub fn broker_host(&self) -> &str {
        &self.broker_host
    }

    /// Fixed path of the broker's access-control list.
    pub fn acl_file_path(&self) -> &str {
        &self.acl_file_path
    }

    /// Fixed certificate storage directory.
    pub fn certs_dir(&self) -> &str {
        &self.certs_dir
    }
}

impl Default for Config {
    /// Same values as resolving an empty environment.
    fn default() -> Self {
        Self {
            api_url: EJBCA_URL.default.to_string(),
            ca_name: CA_NAME.default.to_string(),
            key_length: 2048,
            broker_host: KAFKA_HOST.default.to_string(),
            acl_file_path: ACL_FILE_PATH.to_string(),
            certs_dir: CERTS_DIR.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log format: json or pretty
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    /// `info`, human-readable.
    fn default() -> Self {
        Self {
            level: LOG_LEVEL.default.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}
