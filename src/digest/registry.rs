// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Registry lookup capability.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("image {repository}:{tag} not found in registry")]
    NotFound { repository: String, tag: String },

    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a mutable tag to the hex content digest it currently points at.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn lookup(&self, repository: &str, tag: &str) -> Result<String, LookupError>;
}

/// Fixed `repository:tag` to digest table.
///
/// Loaded from a TOML file of `"repository:tag" = "hex"` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRegistry {
    entries: HashMap<String, String>,
}

impl StaticRegistry {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let entries: HashMap<String, String> = toml::from_str(content)?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = registry.len(), "loaded static registry");
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RegistryLookup for StaticRegistry {
    async fn lookup(&self, repository: &str, tag: &str) -> Result<String, LookupError> {
        self.entries
            .get(&format!("{}:{}", repository, tag))
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                repository: repository.to_string(),
                tag: tag.to_string(),
            })
    }
}
