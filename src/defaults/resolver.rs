// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parameter defaulting.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::constants::*;
use super::sidecars::{normalize_sidecars, resolve_sidecars};
use super::{CredentialDefaults, Hints};
use crate::intent::{
    Action, ContainerSpec, DeploymentIntent, Kind, ProbeSpec, ResourceSpec, StrategyType,
    UpdateMode, Visibility,
};

/// Fill every unset field of `intent` with its convention-based default.
///
/// Explicit values always win over hints, hints win over built-in defaults.
/// Unknown enum values are left untouched for the validator to report.
pub fn resolve(intent: &mut DeploymentIntent, hints: &Hints) {
    normalize_sidecars(intent);

    resolve_identity(intent, hints);
    resolve_labels(intent, hints);
    resolve_container(intent);
    resolve_scaling(intent);
    resolve_networking(intent);
    resolve_kind_specific(intent);
    resolve_sidecars(intent);

    tracing::debug!(
        app = %intent.app,
        kind = %intent.kind,
        visibility = %intent.visibility,
        action = %intent.action,
        sidecars = intent.sidecars.len(),
        "resolved deployment intent"
    );
}

/// Fill namespace and image repository from the deployment credential.
pub fn apply_credential_defaults(intent: &mut DeploymentIntent, credential: &CredentialDefaults) {
    fill_str(&mut intent.namespace, &credential.default_namespace);
    fill_str(&mut intent.container.image_repository, &credential.project);
}

pub(super) fn fill_str(field: &mut String, value: &str) {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
    }
}

/// Zero and negative numbers count as unset.
pub(super) fn fill_positive(field: &mut i32, value: i32) {
    if *field <= 0 {
        *field = value;
    }
}

fn fill_flag(field: &mut Option<bool>, value: bool) {
    if field.is_none() {
        *field = Some(value);
    }
}

/// CPU: an empty request takes the limit, else the default. The limit only
/// mirrors a request the author declared; a defaulted request leaves it empty.
pub(super) fn fill_cpu(cpu: &mut ResourceSpec, default_request: &str) {
    if cpu.request.is_empty() {
        cpu.request_defaulted = true;
        cpu.request = if cpu.limit.is_empty() {
            default_request.to_string()
        } else {
            cpu.limit.clone()
        };
    }
    if cpu.limit.is_empty() && !cpu.request_defaulted {
        cpu.limit = cpu.request.clone();
    }
}

/// Memory: like CPU, except that the limit always ends up set.
pub(super) fn fill_memory(memory: &mut ResourceSpec, default_request: &str, default_limit: &str) {
    if memory.request.is_empty() {
        memory.request_defaulted = true;
        memory.request = if memory.limit.is_empty() {
            default_request.to_string()
        } else {
            memory.limit.clone()
        };
    }
    if memory.limit.is_empty() {
        memory.limit = if memory.request_defaulted {
            default_limit.to_string()
        } else {
            memory.request.clone()
        };
    }
}

fn resolve_identity(intent: &mut DeploymentIntent, hints: &Hints) {
    if !hints.release_action.is_empty() {
        intent.action = Action::from(hints.release_action.as_str());
    } else if intent.action.is_unset() {
        intent.action = Action::DeploySimple;
    }

    fill_str(&mut intent.app, &hints.app_label);
    fill_str(&mut intent.app, &hints.git_name);

    if !hints.build_version.is_empty() {
        intent.build_version = hints.build_version.clone();
    }

    fill_str(&mut intent.google_cloud_credentials_app, &intent.app);
    fill_flag(
        &mut intent.disable_service_account_key_rotation,
        DEFAULT_DISABLE_SERVICE_ACCOUNT_KEY_ROTATION,
    );

    let container = &mut intent.container;
    fill_str(&mut container.image_name, &intent.app);
    fill_str(&mut container.image_tag, &hints.build_version);
    fill_str(&mut container.image_pull_policy, DEFAULT_IMAGE_PULL_POLICY);

    if intent.kind.is_unset() {
        intent.kind = Kind::Deployment;
    }
    if intent.visibility.is_unset() {
        intent.visibility = Visibility::Private;
    }
}

fn resolve_labels(intent: &mut DeploymentIntent, hints: &Hints) {
    if intent.labels.is_empty() && !hints.labels.is_empty() {
        tracing::debug!(count = hints.labels.len(), "seeding labels from pipeline labels");
        intent.labels = hints.labels.clone();
    }
    if !intent.app.is_empty() {
        intent.labels.insert("app".to_string(), intent.app.clone());
    }

    // "--" and "//" are not valid label values
    let identity_known = [&hints.git_source, &hints.git_owner, &hints.git_name]
        .iter()
        .all(|part| !part.is_empty());
    if identity_known {
        intent
            .labels
            .insert(PIPELINE_LABEL.to_string(), hints.pipeline_identity());
        intent.labels.insert(
            PIPELINE_BASE64_LABEL.to_string(),
            STANDARD.encode(hints.pipeline_path()),
        );
    }
}

fn resolve_probe(
    probe: &mut ProbeSpec,
    path: &str,
    port: i32,
    initial_delay_seconds: i32,
    enabled: bool,
) {
    fill_flag(&mut probe.enabled, enabled);
    fill_str(&mut probe.path, path);
    fill_positive(&mut probe.port, port);
    if initial_delay_seconds > 0 {
        fill_positive(&mut probe.initial_delay_seconds, initial_delay_seconds);
    } else if probe.initial_delay_seconds < 0 {
        probe.initial_delay_seconds = 0;
    }
    fill_positive(&mut probe.timeout_seconds, DEFAULT_PROBE_TIMEOUT_SECONDS);
    fill_positive(&mut probe.period_seconds, DEFAULT_PROBE_PERIOD_SECONDS);
    fill_positive(&mut probe.failure_threshold, DEFAULT_FAILURE_THRESHOLD);
    fill_positive(&mut probe.success_threshold, DEFAULT_SUCCESS_THRESHOLD);
}

fn resolve_container(intent: &mut DeploymentIntent) {
    let readiness_enabled = intent.kind != Kind::HeadlessDeployment;
    let visibility = intent.visibility.clone();
    let container: &mut ContainerSpec = &mut intent.container;

    fill_cpu(&mut container.cpu, DEFAULT_CPU_REQUEST);
    fill_memory(&mut container.memory, DEFAULT_MEMORY, DEFAULT_MEMORY);

    fill_positive(&mut container.port, DEFAULT_CONTAINER_PORT);
    let port = container.port;

    for additional in &mut container.additional_ports {
        fill_str(&mut additional.protocol, DEFAULT_PORT_PROTOCOL);
        if additional.visibility.is_unset() {
            additional.visibility = visibility.clone();
        }
    }

    resolve_probe(
        &mut container.liveness_probe,
        DEFAULT_LIVENESS_PATH,
        port,
        DEFAULT_LIVENESS_DELAY_SECONDS,
        true,
    );
    resolve_probe(
        &mut container.readiness_probe,
        DEFAULT_READINESS_PATH,
        port,
        0,
        readiness_enabled,
    );

    let metrics = &mut container.metrics;
    fill_flag(&mut metrics.scrape, true);
    fill_str(&mut metrics.path, DEFAULT_METRICS_PATH);
    fill_positive(&mut metrics.port, port);

    let lifecycle = &mut container.lifecycle;
    fill_flag(&mut lifecycle.prestop_sleep, true);
    if lifecycle.prestop_sleep_seconds.is_none() {
        lifecycle.prestop_sleep_seconds = Some(DEFAULT_PRESTOP_SLEEP_SECONDS);
    }

    fill_flag(&mut intent.probe_service, true);
}

fn resolve_scaling(intent: &mut DeploymentIntent) {
    let autoscale = &mut intent.autoscale;
    fill_flag(&mut autoscale.enabled, true);
    fill_positive(&mut autoscale.min_replicas, DEFAULT_MIN_REPLICAS);
    fill_positive(&mut autoscale.max_replicas, DEFAULT_MAX_REPLICAS);
    fill_positive(&mut autoscale.cpu_percentage, DEFAULT_CPU_PERCENTAGE);

    let safety = &mut autoscale.safety;
    if safety.prom_query.is_empty() {
        safety.prom_query = default_safety_prom_query(&intent.app);
    }
    fill_str(&mut safety.ratio, DEFAULT_SAFETY_RATIO);
    fill_str(&mut safety.scale_down_ratio, DEFAULT_SAFETY_RATIO);

    let vpa = &mut intent.vertical_pod_autoscaler;
    fill_flag(&mut vpa.enabled, false);
    if vpa.update_mode.is_unset() {
        vpa.update_mode = UpdateMode::Off;
    }
}

fn resolve_networking(intent: &mut DeploymentIntent) {
    let request = &mut intent.request;
    fill_str(&mut request.timeout, DEFAULT_REQUEST_TIMEOUT);
    fill_str(&mut request.max_body_size, DEFAULT_MAX_BODY_SIZE);
    fill_str(&mut request.proxy_buffer_size, DEFAULT_PROXY_BUFFER_SIZE);
    if intent.visibility == Visibility::Apigee {
        fill_positive(&mut request.verify_depth, DEFAULT_APIGEE_VERIFY_DEPTH);
    }

    fill_str(&mut intent.basepath, DEFAULT_BASEPATH);
    if intent.trusted_ip_ranges.is_empty() {
        intent.trusted_ip_ranges = DEFAULT_TRUSTED_IP_RANGES
            .iter()
            .map(|range| range.to_string())
            .collect();
    }

    if intent.strategy_type.is_unset() {
        intent.strategy_type = StrategyType::RollingUpdate;
    }
    let rolling_update = &mut intent.rolling_update;
    fill_str(&mut rolling_update.max_surge, DEFAULT_MAX_SURGE);
    fill_str(&mut rolling_update.max_unavailable, DEFAULT_MAX_UNAVAILABLE);
    fill_str(&mut rolling_update.timeout, DEFAULT_ROLLOUT_TIMEOUT);

    fill_str(&mut intent.configs.mount_path, DEFAULT_CONFIGS_MOUNT_PATH);
    fill_str(&mut intent.secrets.mount_path, DEFAULT_SECRETS_MOUNT_PATH);
}

fn resolve_kind_specific(intent: &mut DeploymentIntent) {
    if intent.kind == Kind::CronJob {
        fill_str(&mut intent.concurrency_policy, DEFAULT_CONCURRENCY_POLICY);
    }

    if intent.kind.is_job_family() {
        fill_str(&mut intent.restart_policy, DEFAULT_RESTART_POLICY);
        fill_positive(&mut intent.completions, DEFAULT_COMPLETIONS);
        fill_positive(&mut intent.parallelism, DEFAULT_PARALLELISM);
        // explicit zero disables retries and must survive
        if intent.backoff_limit.is_none() {
            intent.backoff_limit = Some(DEFAULT_BACKOFF_LIMIT);
        }
    }

    if intent.kind == Kind::StatefulSet {
        fill_str(&mut intent.pod_management_policy, DEFAULT_POD_MANAGEMENT_POLICY);
        fill_str(&mut intent.storage_class, DEFAULT_STORAGE_CLASS);
        fill_str(&mut intent.storage_size, DEFAULT_STORAGE_SIZE);
        fill_str(&mut intent.storage_mount_path, DEFAULT_STORAGE_MOUNT_PATH);
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
