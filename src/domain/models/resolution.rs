//! Provenance of resolved settings.

use serde::Serialize;
use std::fmt;

use super::config::Config;
use super::setting::{Setting, SettingKind};

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The setting's default literal
    Default,
    /// A variable present in the environment
    Environment,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// One setting after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSetting {
    /// Environment key
    pub key: &'static str,
    /// Declared type
    pub kind: SettingKind,
    /// Default literal
    pub default: &'static str,
    /// Effective value as text
    pub value: String,
    /// Where the effective value came from
    pub source: ValueSource,
}

impl ResolvedSetting {
    pub(crate) fn new(setting: &Setting, value: String, source: ValueSource) -> Self {
        Self {
            key: setting.key,
            kind: setting.kind,
            default: setting.default,
            value,
            source,
        }
    }

    /// Whether the value came from the environment.
    pub fn is_overridden(&self) -> bool {
        self.source == ValueSource::Environment
    }
}

/// A resolved [`Config`] together with the provenance of each setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved configuration
    pub config: Config,
    /// One entry per catalogue setting, in catalogue order
    pub settings: Vec<ResolvedSetting>,
}

impl Resolution {
    /// Look up a resolved setting by environment key.
    pub fn setting(&self, key: &str) -> Option<&ResolvedSetting> {
        self.settings.iter().find(|s| s.key == key)
    }

    /// Settings whose value came from the environment.
    pub fn overridden(&self) -> impl Iterator<Item = &ResolvedSetting> {
        self.settings.iter().filter(|s| s.is_overridden())
    }

    /// Drop the provenance and keep the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}
