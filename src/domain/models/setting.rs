//! Catalogue of environment-resolvable settings.
//!
//! Each [`Setting`] pairs an environment key with its default literal and the
//! type the raw value is coerced into. The resolver and the CLI both walk
//! this table, so adding a setting here is the only place a key is declared.

use serde::Serialize;
use std::fmt;

use crate::domain::errors::{ConfigError, ConfigResult};

/// Target type of a setting's raw string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Verbatim, non-empty text
    Text,
    /// Base-10 integer greater than zero that fits in a `u32`
    PositiveInteger,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::PositiveInteger => write!(f, "positive integer"),
        }
    }
}

/// A coerced setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Verbatim text value
    Text(String),
    /// Positive integer value
    Integer(u32),
}

impl SettingValue {
    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    /// The integer, if this is an integer value.
    pub const fn as_integer(&self) -> Option<u32> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// Descriptor of one environment-resolvable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Setting {
    /// Environment variable name
    pub key: &'static str,
    /// Literal used when the variable is absent
    pub default: &'static str,
    /// Declared type of the value
    pub kind: SettingKind,
}

impl Setting {
    const fn new(key: &'static str, default: &'static str, kind: SettingKind) -> Self {
        Self { key, default, kind }
    }

    /// Coerce a raw value into this setting's declared type.
    pub fn coerce(&self, raw: &str) -> ConfigResult<SettingValue> {
        match self.kind {
            SettingKind::Text => {
                if raw.is_empty() {
                    return Err(ConfigError::invalid(self.key, raw, "must not be empty"));
                }
                Ok(SettingValue::Text(raw.to_string()))
            }
            SettingKind::PositiveInteger => {
                // Surrounding whitespace is ignored.
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::invalid(self.key, raw, "must not be empty"));
                }
                let Some(digits) = strip_digit_separators(trimmed) else {
                    return Err(ConfigError::invalid(
                        self.key,
                        raw,
                        "expected a positive integer: misplaced '_' separator",
                    ));
                };
                match digits.parse::<u32>() {
                    Ok(0) => Err(ConfigError::invalid(
                        self.key,
                        raw,
                        "must be greater than zero",
                    )),
                    Ok(n) => Ok(SettingValue::Integer(n)),
                    Err(e) => Err(ConfigError::invalid(
                        self.key,
                        raw,
                        format!("expected a positive integer: {e}"),
                    )),
                }
            }
        }
    }

    /// Coerce the default literal.
    pub fn default_value(&self) -> ConfigResult<SettingValue> {
        self.coerce(self.default)
    }
}

/// Remove `_` digit-group separators (`2_048`). Each one must sit between
/// two ASCII digits; otherwise `None`.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|c| c.is_ascii_digit())
                || !after.is_some_and(|c| c.is_ascii_digit())
            {
                return None;
            }
        }
    }
    Some(s.replace('_', ""))
}

/// Endpoint of the certificate-issuance service.
pub const EJBCA_URL: Setting = Setting::new(
    "MQTTREST_EJBCA_URL",
    "http://ejbca:5583",
    SettingKind::Text,
);

/// Logical name of the certificate authority.
pub const CA_NAME: Setting = Setting::new("MQTTREST_CA_NAME", "IOTmidCA", SettingKind::Text);

/// Key size in bits. The key name is misspelled in every existing deployment
/// and must stay that way.
pub const KEY_LENGTH: Setting = Setting::new(
    "MQTTREST_KEY_LENGHT",
    "2048",
    SettingKind::PositiveInteger,
);

/// `host:port` of the message broker.
pub const KAFKA_HOST: Setting = Setting::new(
    "MQTTREST_KAFKA_HOST",
    "kafka:9092",
    SettingKind::Text,
);

/// Log level of the subscriber.
pub const LOG_LEVEL: Setting = Setting::new("MQTTREST_LOG_LEVEL", "info", SettingKind::Text);

/// Log output format, `pretty` or `json`.
pub const LOG_FORMAT: Setting = Setting::new("MQTTREST_LOG_FORMAT", "pretty", SettingKind::Text);

/// Settings that make up [`Config`](super::config::Config), in field order.
pub const SETTINGS: [Setting; 4] = [EJBCA_URL, CA_NAME, KEY_LENGTH, KAFKA_HOST];

/// Settings consumed by the logging subscriber.
pub const LOGGING_SETTINGS: [Setting; 2] = [LOG_LEVEL, LOG_FORMAT];
