// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Built-in defaults, overlaid by an optional TOML file named in
//! `DEPLOY_INTENT_CONFIG`, overlaid by `DEPLOY_INTENT_*` variables.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::digest::DEFAULT_DIGEST_CONCURRENCY;

pub const CONFIG_FILE_ENV: &str = "DEPLOY_INTENT_CONFIG";
pub const DIGEST_CONCURRENCY_ENV: &str = "DEPLOY_INTENT_DIGEST_CONCURRENCY";
pub const REGISTRY_FILE_ENV: &str = "DEPLOY_INTENT_REGISTRY_FILE";
pub const LOG_FORMAT_ENV: &str = "DEPLOY_INTENT_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Registry lookups in flight during digest pinning.
    pub digest_concurrency: usize,
    /// `repository:tag = digest` table used for pinning.
    pub registry_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            digest_concurrency: DEFAULT_DIGEST_CONCURRENCY,
            registry_file: None,
            log_format: LogFormat::Text,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay values from an environment snapshot.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(value) = env.get(DIGEST_CONCURRENCY_ENV) {
            self.digest_concurrency = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: DIGEST_CONCURRENCY_ENV,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = env.get(REGISTRY_FILE_ENV) {
            if !value.is_empty() {
                self.registry_file = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = env.get(LOG_FORMAT_ENV) {
            self.log_format = LogFormat::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                key: LOG_FORMAT_ENV,
                value: value.clone(),
            })?;
        }
        Ok(())
    }

    /// Layer defaults, the optional config file and the environment.
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = match env.get(CONFIG_FILE_ENV).filter(|path| !path.is_empty()) {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }
}

/// Snapshot of the process environment.
pub fn env_snapshot() -> HashMap<String, String> {
    utf8_entries(std::env::vars_os())
}

/// Keep the variables whose name and value are both valid UTF-8.
fn utf8_entries<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::debug!(%key, "skipping environment variable with non UTF-8 value");
                None
            }
            _ => None,
        })
        .collect()
}

/// Load configuration from the process environment.
pub fn load() -> Result<EngineConfig, ConfigError> {
    EngineConfig::from_env_map(&env_snapshot())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
