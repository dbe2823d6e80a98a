// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Convention-based defaulting of deployment intents.
//!
//! [`resolve`] turns a sparse intent into a fully resolved one. It never
//! fails and is idempotent.

pub mod constants;
mod resolver;
mod sidecars;

use std::collections::BTreeMap;

pub use resolver::{apply_credential_defaults, resolve};
pub use sidecars::{default_openresty_sidecar, normalize_sidecars};

/// Values supplied by the pipeline runtime rather than the stage author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    /// Repository host, e.g. `github.com`.
    pub git_source: String,
    pub git_owner: String,
    /// Repository (and pipeline) name.
    pub git_name: String,
    /// App label declared on the pipeline.
    pub app_label: String,
    pub build_version: String,
    /// Release action chosen when triggering the release, e.g. a rollback.
    pub release_action: String,
    /// Labels declared on the pipeline.
    pub labels: BTreeMap<String, String>,
}

impl Hints {
    /// `source-owner-name`, safe to use as a label value.
    pub fn pipeline_identity(&self) -> String {
        format!("{}-{}-{}", self.git_source, self.git_owner, self.git_name)
    }

    /// `source/owner/name`.
    pub fn pipeline_path(&self) -> String {
        format!("{}/{}/{}", self.git_source, self.git_owner, self.git_name)
    }
}

/// Properties attached to the deployment credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDefaults {
    pub default_namespace: String,
    /// Project hosting the container images.
    pub project: String,
}
