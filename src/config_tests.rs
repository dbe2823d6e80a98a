// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for engine configuration loading.

use std::io::Write;

use super::*;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let config = EngineConfig::from_env_map(&HashMap::new()).unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.digest_concurrency, 4);
    assert_eq!(config.registry_file, None);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn test_env_overrides() {
    let config = EngineConfig::from_env_map(&env(&[
        (DIGEST_CONCURRENCY_ENV, "8"),
        (REGISTRY_FILE_ENV, "/etc/deploy/registry.toml"),
        (LOG_FORMAT_ENV, "JSON"),
    ]))
    .unwrap();
    assert_eq!(config.digest_concurrency, 8);
    assert_eq!(
        config.registry_file,
        Some(PathBuf::from("/etc/deploy/registry.toml"))
    );
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_concurrency_rejected() {
    for value in ["zero", "0", "-2"] {
        let result = EngineConfig::from_env_map(&env(&[(DIGEST_CONCURRENCY_ENV, value)]));
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { key, .. }) if key == DIGEST_CONCURRENCY_ENV),
            "value {}",
            value
        );
    }
}

#[test]
fn test_invalid_log_format_rejected() {
    let result = EngineConfig::from_env_map(&env(&[(LOG_FORMAT_ENV, "xml")]));
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "digest_concurrency = 2").unwrap();
    writeln!(file, "registry_file = \"/srv/registry.toml\"").unwrap();
    writeln!(file, "log_format = \"json\"").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let config = EngineConfig::from_env_map(&env(&[(CONFIG_FILE_ENV, path.as_str())])).unwrap();
    assert_eq!(config.digest_concurrency, 2);
    assert_eq!(config.registry_file, Some(PathBuf::from("/srv/registry.toml")));
    assert_eq!(config.log_format, LogFormat::Json);

    let config = EngineConfig::from_env_map(&env(&[
        (CONFIG_FILE_ENV, path.as_str()),
        (DIGEST_CONCURRENCY_ENV, "6"),
    ]))
    .unwrap();
    assert_eq!(config.digest_concurrency, 6);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_format = \"json\"").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let config = EngineConfig::from_env_map(&env(&[(CONFIG_FILE_ENV, path.as_str())])).unwrap();
    assert_eq!(config.digest_concurrency, 4);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml").to_string_lossy().to_string();
    let result = EngineConfig::from_env_map(&env(&[(CONFIG_FILE_ENV, path.as_str())]));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "digest_concurrency = \"many\"").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let result = EngineConfig::from_env_map(&env(&[(CONFIG_FILE_ENV, path.as_str())]));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[cfg(unix)]
#[test]
fn test_env_snapshot_skips_non_utf8_entries() {
    use std::os::unix::ffi::OsStringExt;

    let vars = vec![
        (OsString::from(LOG_FORMAT_ENV), OsString::from("json")),
        (OsString::from("DEPLOY_BROKEN"), OsString::from_vec(vec![0x66, 0xff])),
        (OsString::from_vec(vec![0xfe, 0x41]), OsString::from("value")),
    ];
    let env = utf8_entries(vars);

    assert_eq!(env.len(), 1);
    assert_eq!(env[LOG_FORMAT_ENV], "json");
    let config = EngineConfig::from_env_map(&env).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
}
