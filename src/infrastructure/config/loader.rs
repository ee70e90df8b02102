use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::setting::{
    CA_NAME, EJBCA_URL, KAFKA_HOST, KEY_LENGTH, LOG_FORMAT, LOG_LEVEL,
};
use crate::domain::models::{
    Config, LogFormat, LoggingConfig, Resolution, ResolvedSetting, Setting, SettingValue,
    ValueSource,
};
use crate::domain::ports::Environment;

use super::env::ProcessEnvironment;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Resolves [`Config`] from an environment source.
///
/// For every setting in the catalogue the loader looks the key up; a present
/// value is coerced to the declared type, an absent one falls back to the
/// default literal. The first coercion failure aborts resolution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve configuration from the process environment.
    pub fn load() -> ConfigResult<Config> {
        Self::load_from(&ProcessEnvironment)
    }

    /// Resolve configuration from any environment source.
    pub fn load_from(env: &impl Environment) -> ConfigResult<Config> {
        Self::resolve(env).map(Resolution::into_config)
    }

    /// Resolve configuration and record where each value came from.
    pub fn resolve(env: &impl Environment) -> ConfigResult<Resolution> {
        let mut settings = Vec::with_capacity(4);

        let api_url = Self::text(env, &EJBCA_URL, &mut settings)?;
        let ca_name = Self::text(env, &CA_NAME, &mut settings)?;
        let key_length = Self::integer(env, &KEY_LENGTH, &mut settings)?;
        let broker_host = Self::text(env, &KAFKA_HOST, &mut settings)?;

        let config = Config::new(api_url, ca_name, key_length, broker_host)?;

        debug!(
            overridden = settings.iter().filter(|s| s.is_overridden()).count(),
            "configuration resolved"
        );

        Ok(Resolution { config, settings })
    }

    /// Resolve the logging settings.
    pub fn load_logging(env: &impl Environment) -> ConfigResult<LoggingConfig> {
        let mut settings = Vec::with_capacity(2);

        let raw_level = Self::text(env, &LOG_LEVEL, &mut settings)?;
        let level = raw_level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(raw_level));
        }

        let format: LogFormat = Self::text(env, &LOG_FORMAT, &mut settings)?.parse()?;

        Ok(LoggingConfig { level, format })
    }

    /// Re-check the invariants of a configuration.
    ///
    /// Every `Config` is validated when built (`Config::new` and
    /// deserialization both go through the same checks), so a value obtained
    /// through the public API always passes.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        config.validate()
    }

    fn text(
        env: &impl Environment,
        setting: &Setting,
        resolved: &mut Vec<ResolvedSetting>,
    ) -> ConfigResult<String> {
        match Self::lookup(env, setting, resolved)? {
            SettingValue::Text(s) => Ok(s),
            SettingValue::Integer(n) => Err(ConfigError::invalid(
                setting.key,
                n.to_string(),
                "expected text",
            )),
        }
    }

    fn integer(
        env: &impl Environment,
        setting: &Setting,
        resolved: &mut Vec<ResolvedSetting>,
    ) -> ConfigResult<u32> {
        match Self::lookup(env, setting, resolved)? {
            SettingValue::Integer(n) => Ok(n),
            SettingValue::Text(s) => Err(ConfigError::invalid(
                setting.key,
                s,
                "expected a positive integer",
            )),
        }
    }

    fn lookup(
        env: &impl Environment,
        setting: &Setting,
        resolved: &mut Vec<ResolvedSetting>,
    ) -> ConfigResult<SettingValue> {
        let (value, source) = match env.var_os(setting.key) {
            None => (setting.default_value()?, ValueSource::Default),
            Some(raw) => {
                let raw = raw.into_string().map_err(|raw| {
                    ConfigError::invalid(
                        setting.key,
                        raw.to_string_lossy(),
                        "not valid unicode",
                    )
                })?;
                (setting.coerce(&raw)?, ValueSource::Environment)
            }
        };

        debug!(key = setting.key, source = %source, "resolved setting");

        let effective = match &value {
            SettingValue::Text(s) => s.clone(),
            SettingValue::Integer(n) => n.to_string(),
        };
        resolved.push(ResolvedSetting::new(setting, effective, source));

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ACL_FILE_PATH, CERTS_DIR, SETTINGS};
    use crate::infrastructure::config::MapEnvironment;

    fn overrides() -> MapEnvironment {
        MapEnvironment::new()
            .with("MQTTREST_EJBCA_URL", "https://ejbca.internal:8443")
            .with("MQTTREST_CA_NAME", "DevicesCA")
            .with("MQTTREST_KEY_LENGHT", "4096")
            .with("MQTTREST_KAFKA_HOST", "broker-0:29092")
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = ConfigLoader::load_from(&MapEnvironment::new()).unwrap();
        assert_eq!(config.api_url(), "http://ejbca:5583");
        assert_eq!(config.ca_name(), "IOTmidCA");
        assert_eq!(config.key_length(), 2048);
        assert_eq!(config.broker_host(), "kafka:9092");
        assert_eq!(config, Config::default());
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_env_override() {
        let config = ConfigLoader::load_from(&overrides()).unwrap();
        assert_eq!(config.api_url(), "https://ejbca.internal:8443");
        assert_eq!(config.ca_name(), "DevicesCA");
        assert_eq!(config.key_length(), 4096);
        assert_eq!(config.broker_host(), "broker-0:29092");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let env = MapEnvironment::new().with("MQTTREST_CA_NAME", "OtherCA");
        let config = ConfigLoader::load_from(&env).unwrap();
        assert_eq!(config.ca_name(), "OtherCA");
        assert_eq!(config.api_url(), "http://ejbca:5583");
        assert_eq!(config.key_length(), 2048);
    }

    #[test]
    fn test_invalid_key_length() {
        let env = MapEnvironment::new().with("MQTTREST_KEY_LENGHT", "notanumber");
        let result = ConfigLoader::load_from(&env);
        match result.unwrap_err() {
            ConfigError::InvalidConfigValue { key, value, .. } => {
                assert_eq!(key, "MQTTREST_KEY_LENGHT");
                assert_eq!(value, "notanumber");
            }
            other => panic!("Expected InvalidConfigValue error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_key_length() {
        let env = MapEnvironment::new().with("MQTTREST_KEY_LENGHT", "0");
        assert!(matches!(
            ConfigLoader::load_from(&env),
            Err(ConfigError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_empty_string_setting_rejected() {
        let env = MapEnvironment::new().with("MQTTREST_EJBCA_URL", "");
        let err = ConfigLoader::load_from(&env).unwrap_err();
        assert_eq!(err.key(), Some("MQTTREST_EJBCA_URL"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let env = MapEnvironment::new()
            .with("MQTTREST_CA_NAME", OsString::from_vec(vec![0x66, 0x6f, 0x80]));
        let err = ConfigLoader::load_from(&env).unwrap_err();
        match err {
            ConfigError::InvalidConfigValue { key, reason, .. } => {
                assert_eq!(key, "MQTTREST_CA_NAME");
                assert_eq!(reason, "not valid unicode");
            }
            other => panic!("Expected InvalidConfigValue error, got {other:?}"),
        }
    }

    #[test]
    fn test_fixed_paths_ignore_environment() {
        let env = overrides()
            .with("MQTTREST_ACL_FILE_PATH", "/tmp/access.acl")
            .with("MQTTREST_CERTS_DIR", "/tmp/certs/")
            .with("ACLfilePath", "/tmp/other.acl")
            .with("certsDir", "/tmp/other/");
        let config = ConfigLoader::load_from(&env).unwrap();
        assert_eq!(config.acl_file_path(), ACL_FILE_PATH);
        assert_eq!(config.certs_dir(), CERTS_DIR);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let env = overrides();
        let first = ConfigLoader::resolve(&env).unwrap();
        let second = ConfigLoader::resolve(&env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolution_provenance() {
        let env = MapEnvironment::new().with("MQTTREST_KEY_LENGHT", " 3072 ");
        let resolution = ConfigLoader::resolve(&env).unwrap();

        let keys: Vec<_> = resolution.settings.iter().map(|s| s.key).collect();
        let catalogue: Vec<_> = SETTINGS.iter().map(|s| s.key).collect();
        assert_eq!(keys, catalogue);

        let key_length = resolution.setting("MQTTREST_KEY_LENGHT").unwrap();
        assert_eq!(key_length.source, ValueSource::Environment);
        assert_eq!(key_length.value, "3072");

        let ca = resolution.setting("MQTTREST_CA_NAME").unwrap();
        assert_eq!(ca.source, ValueSource::Default);
        assert_eq!(ca.value, "IOTmidCA");

        assert_eq!(resolution.overridden().count(), 1);
        assert_eq!(resolution.into_config().key_length(), 3072);
    }

    #[test]
    fn test_logging_defaults() {
        let logging = ConfigLoader::load_logging(&MapEnvironment::new()).unwrap();
        assert_eq!(logging, LoggingConfig::default());
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_logging_overrides() {
        let env = MapEnvironment::new()
            .with("MQTTREST_LOG_LEVEL", "DEBUG")
            .with("MQTTREST_LOG_FORMAT", "json");
        let logging = ConfigLoader::load_logging(&env).unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let env = MapEnvironment::new().with("MQTTREST_LOG_LEVEL", "verbose");
        match ConfigLoader::load_logging(&env).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_log_level_reports_raw_value() {
        let env = MapEnvironment::new().with("MQTTREST_LOG_LEVEL", "VERBOSE");
        assert_eq!(
            ConfigLoader::load_logging(&env).unwrap_err(),
            ConfigError::InvalidLogLevel("VERBOSE".to_string())
        );
    }

    #[test]
    fn test_validate_deserialized_config() {
        let config: Config = serde_json::from_str(
            r#"{"api_url":"https://ca:8443","ca_name":"EdgeCA","key_length":3072,"broker_host":"kafka:9092"}"#,
        )
        .unwrap();
        assert!(ConfigLoader::validate(&config).is_ok());
        assert_eq!(config.key_length(), 3072);
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let env = MapEnvironment::new().with("MQTTREST_LOG_FORMAT", "xml");
        assert!(matches!(
            ConfigLoader::load_logging(&env),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }
}
