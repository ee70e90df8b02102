//! Resolution against the real process environment.
//!
//! Variables are scoped with `temp_env`, which serializes access to the
//! environment across tests.

use mqttrest::{
    ConfigError, ConfigLoader, ProcessEnvironment, ValueSource, ACL_FILE_PATH, CERTS_DIR,
};

const KEYS: [&str; 4] = [
    "MQTTREST_EJBCA_URL",
    "MQTTREST_CA_NAME",
    "MQTTREST_KEY_LENGHT",
    "MQTTREST_KAFKA_HOST",
];

#[test]
fn test_empty_environment_scenario() {
    temp_env::with_vars_unset(KEYS, || {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.api_url(), "http://ejbca:5583");
        assert_eq!(config.ca_name(), "IOTmidCA");
        assert_eq!(config.key_length(), 2048);
        assert_eq!(config.broker_host(), "kafka:9092");
        assert_eq!(config.acl_file_path(), ACL_FILE_PATH);
        assert_eq!(config.certs_dir(), CERTS_DIR);
    });
}

#[test]
fn test_key_length_override() {
    temp_env::with_vars(
        [
            ("MQTTREST_KEY_LENGHT", Some("4096")),
            ("MQTTREST_EJBCA_URL", None),
            ("MQTTREST_CA_NAME", None),
            ("MQTTREST_KAFKA_HOST", None),
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.key_length(), 4096);
            assert_eq!(config.api_url(), "http://ejbca:5583");
        },
    );
}

#[test]
fn test_key_length_not_a_number() {
    temp_env::with_var("MQTTREST_KEY_LENGHT", Some("notanumber"), || {
        let err = ConfigLoader::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigValue { .. }));
        assert_eq!(err.key(), Some("MQTTREST_KEY_LENGHT"));
    });
}

#[test]
fn test_all_overrides_from_process() {
    temp_env::with_vars(
        [
            ("MQTTREST_EJBCA_URL", Some("https://pki.example:8443/ejbca")),
            ("MQTTREST_CA_NAME", Some("FleetCA")),
            ("MQTTREST_KEY_LENGHT", Some("3072")),
            ("MQTTREST_KAFKA_HOST", Some("kafka-1.example:9092")),
        ],
        || {
            let resolution = ConfigLoader::resolve(&ProcessEnvironment).unwrap();
            assert!(resolution
                .settings
                .iter()
                .all(|s| s.source == ValueSource::Environment));

            let config = resolution.into_config();
            assert_eq!(config.api_url(), "https://pki.example:8443/ejbca");
            assert_eq!(config.ca_name(), "FleetCA");
            assert_eq!(config.key_length(), 3072);
            assert_eq!(config.broker_host(), "kafka-1.example:9092");
        },
    );
}

#[test]
fn test_paths_are_not_environment_resolvable() {
    temp_env::with_vars(
        [
            ("MQTTREST_ACL_FILE_PATH", Some("/tmp/access.acl")),
            ("MQTTREST_CERTS_DIR", Some("/tmp/certs/")),
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.acl_file_path(), "/opt/iot-agent/mosca/certs/access.acl");
            assert_eq!(config.certs_dir(), "/opt/iot-agent/mosca/certs/");
        },
    );
}

#[test]
fn test_config_is_shareable_across_threads() {
    temp_env::with_vars_unset(KEYS, || {
        let config = std::sync::Arc::new(ConfigLoader::load().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = std::sync::Arc::clone(&config);
                std::thread::spawn(move || config.key_length())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2048);
        }
    });
}
