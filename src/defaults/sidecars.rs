// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sidecar normalisation, defaulting and injection.

use super::constants::*;
use super::resolver::{fill_cpu, fill_memory, fill_positive, fill_str};
use crate::intent::{DeploymentIntent, Kind, SidecarSpec, SidecarType};

/// Fold the deprecated singular `sidecar` field into the `sidecars` list.
///
/// A typed singular entry is prepended, unless the list already carries a
/// sidecar of the same type. The singular field is always consumed.
pub fn normalize_sidecars(intent: &mut DeploymentIntent) {
    let Some(legacy) = intent.sidecar.take() else {
        return;
    };
    if legacy.sidecar_type.is_unset() {
        tracing::debug!("ignoring singular sidecar without a type");
        return;
    }

    if has_type(&intent.sidecars, &legacy.sidecar_type) {
        tracing::debug!(
            sidecar_type = %legacy.sidecar_type,
            "singular sidecar type already present in sidecars list"
        );
        return;
    }

    if intent.sidecars.is_empty() {
        intent.legacy_sidecar_used = true;
    }
    tracing::debug!(sidecar_type = %legacy.sidecar_type, "moving singular sidecar into sidecars list");
    intent.sidecars.insert(0, legacy);
}

/// The http proxy sidecar injected in front of deployments.
pub fn default_openresty_sidecar(readiness_path: &str) -> SidecarSpec {
    let mut sidecar = SidecarSpec::of_type(SidecarType::Openresty);
    fill_sidecar(&mut sidecar, readiness_path);
    sidecar
}

/// Inject the http proxy when wanted, then default every sidecar in place.
pub(super) fn resolve_sidecars(intent: &mut DeploymentIntent) {
    let readiness_path = intent.container.readiness_probe.path.clone();

    if wants_http_proxy_sidecar(intent) {
        tracing::debug!(app = %intent.app, "injecting openresty sidecar");
        intent
            .sidecars
            .push(default_openresty_sidecar(&readiness_path));
    }

    for sidecar in &mut intent.sidecars {
        fill_sidecar(sidecar, &readiness_path);
    }
}

fn has_type(sidecars: &[SidecarSpec], sidecar_type: &SidecarType) -> bool {
    sidecars
        .iter()
        .any(|sidecar| &sidecar.sidecar_type == sidecar_type)
}

fn wants_http_proxy_sidecar(intent: &DeploymentIntent) -> bool {
    intent.kind == Kind::Deployment
        && intent.inject_http_proxy_sidecar != Some(false)
        && !has_type(&intent.sidecars, &SidecarType::Openresty)
}

fn fill_sidecar(sidecar: &mut SidecarSpec, readiness_path: &str) {
    match sidecar.sidecar_type {
        SidecarType::Openresty => {
            fill_str(&mut sidecar.image, DEFAULT_OPENRESTY_IMAGE);
            fill_str(&mut sidecar.health_check_path, readiness_path);
        }
        SidecarType::CloudSqlProxy => {
            fill_positive(&mut sidecar.sql_proxy_port, DEFAULT_SQL_PROXY_PORT);
            fill_positive(
                &mut sidecar.sql_proxy_termination_timeout_seconds,
                DEFAULT_SQL_PROXY_TERMINATION_TIMEOUT_SECONDS,
            );
        }
        _ => {}
    }

    fill_cpu(&mut sidecar.cpu, DEFAULT_SIDECAR_CPU_REQUEST);
    fill_memory(
        &mut sidecar.memory,
        DEFAULT_SIDECAR_MEMORY_REQUEST,
        DEFAULT_SIDECAR_MEMORY_LIMIT,
    );
}

#[cfg(test)]
#[path = "sidecars_tests.rs"]
mod tests;
