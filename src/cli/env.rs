// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pipeline hints and credential defaults read from the environment.

use std::collections::{BTreeMap, HashMap};

use crate::defaults::{CredentialDefaults, Hints};

pub const GIT_SOURCE_ENV: &str = "DEPLOY_GIT_SOURCE";
pub const GIT_OWNER_ENV: &str = "DEPLOY_GIT_OWNER";
pub const GIT_NAME_ENV: &str = "DEPLOY_GIT_NAME";
pub const APP_LABEL_ENV: &str = "DEPLOY_APP_LABEL";
pub const BUILD_VERSION_ENV: &str = "DEPLOY_BUILD_VERSION";
pub const RELEASE_ACTION_ENV: &str = "DEPLOY_RELEASE_ACTION";
pub const LABEL_ENV_PREFIX: &str = "DEPLOY_LABEL_";
pub const CREDENTIAL_NAMESPACE_ENV: &str = "DEPLOY_CREDENTIAL_NAMESPACE";
pub const CREDENTIAL_PROJECT_ENV: &str = "DEPLOY_CREDENTIAL_PROJECT";

fn var(env: &HashMap<String, String>, key: &str) -> String {
    env.get(key).cloned().unwrap_or_default()
}

/// `DEPLOY_LABEL_TEAM=payments` becomes label `team=payments`.
pub fn hints_from_env(env: &HashMap<String, String>) -> Hints {
    let labels: BTreeMap<String, String> = env
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(LABEL_ENV_PREFIX)
                .filter(|label| !label.is_empty())
                .map(|label| (label.to_ascii_lowercase(), value.clone()))
        })
        .collect();

    Hints {
        git_source: var(env, GIT_SOURCE_ENV),
        git_owner: var(env, GIT_OWNER_ENV),
        git_name: var(env, GIT_NAME_ENV),
        app_label: var(env, APP_LABEL_ENV),
        build_version: var(env, BUILD_VERSION_ENV),
        release_action: var(env, RELEASE_ACTION_ENV),
        labels,
    }
}

pub fn credential_defaults_from_env(env: &HashMap<String, String>) -> CredentialDefaults {
    CredentialDefaults {
        default_namespace: var(env, CREDENTIAL_NAMESPACE_ENV),
        project: var(env, CREDENTIAL_PROJECT_ENV),
    }
}
