// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Required-property rules over a resolved intent.

use super::host::validate_host;
use super::report::{ValidationError, ValidationReport, ValidationWarning};
use crate::intent::{
    Action, DeploymentIntent, Kind, LoadBalanceAlgorithm, ProbeSpec, ResourceSpec, SidecarSpec,
    SidecarType, StrategyType, Visibility,
};

const CONCURRENCY_POLICIES: &[&str] = &["Allow", "Forbid", "Replace"];
const POD_MANAGEMENT_POLICIES: &[&str] = &["OrderedReady", "Parallel"];

/// Check every rule and collect all violations.
///
/// Never short-circuits: a report lists each failing rule once.
pub fn validate(intent: &DeploymentIntent) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_identity(intent, &mut report);
    check_hosts(intent, &mut report);
    check_autoscale(intent, &mut report);
    check_container(intent, &mut report);
    check_sidecars(intent, &mut report);
    check_rollout(intent, &mut report);
    check_kind_specific(intent, &mut report);
    check_request(intent, &mut report);
    check_visibility_auth(intent, &mut report);

    report
}

fn require(report: &mut ValidationReport, value: &str, key: &str) {
    if value.is_empty() {
        report.error(ValidationError::required(key));
    }
}

fn require_positive(report: &mut ValidationReport, value: i32, key: &str) {
    if value <= 0 {
        report.error(ValidationError::not_positive(key));
    }
}

fn require_one_of(report: &mut ValidationReport, value: &str, allowed: &[&str], key: &str) {
    if !allowed.contains(&value) {
        report.error(ValidationError::not_allowed(key, value, allowed));
    }
}

fn check_identity(intent: &DeploymentIntent, report: &mut ValidationReport) {
    if intent.app.is_empty() {
        report.error(ValidationError::MissingApp);
    }
    if intent.namespace.is_empty() {
        report.error(ValidationError::MissingNamespace);
    }

    require_one_of(report, intent.kind.as_str(), Kind::ALLOWED, "kind");
    require_one_of(report, intent.action.as_str(), Action::ALLOWED, "action");
    require_one_of(
        report,
        intent.visibility.as_str(),
        Visibility::ALLOWED,
        "visibility",
    );
    if intent.visibility == Visibility::Public {
        report.warn(ValidationWarning::PublicVisibility);
    }

    require(report, &intent.basepath, "basepath");

    let legacy_only = match &intent.sidecar {
        Some(sidecar) => !sidecar.sidecar_type.is_unset() && intent.sidecars.is_empty(),
        None => false,
    };
    if intent.legacy_sidecar_used || legacy_only {
        report.warn(ValidationWarning::LegacySidecar);
    }
}

fn check_hosts(intent: &DeploymentIntent, report: &mut ValidationReport) {
    if intent.kind.is_externally_facing() && intent.hosts.is_empty() {
        report.error(ValidationError::MissingHosts {
            kind: intent.kind.to_string(),
        });
    }

    let all_hosts = intent
        .hosts
        .iter()
        .map(|host| ("hosts", host))
        .chain(intent.internal_hosts.iter().map(|host| ("internalHosts", host)));
    for (key, host) in all_hosts {
        if let Err(source) = validate_host(host) {
            report.error(ValidationError::InvalidHost {
                key: key.to_string(),
                host: host.clone(),
                source,
            });
        }
    }
}

fn check_autoscale(intent: &DeploymentIntent, report: &mut ValidationReport) {
    let autoscale = &intent.autoscale;
    require_positive(report, autoscale.min_replicas, "autoscale.min");
    require_positive(report, autoscale.max_replicas, "autoscale.max");
    require_positive(report, autoscale.cpu_percentage, "autoscale.cpu");
}

/// Requests and the memory limit are mandatory; the CPU limit is not.
fn check_resources(
    report: &mut ValidationReport,
    cpu: &ResourceSpec,
    memory: &ResourceSpec,
    prefix: &str,
) {
    require(report, &cpu.request, &format!("{}.cpu.request", prefix));
    require(report, &memory.request, &format!("{}.memory.request", prefix));
    require(report, &memory.limit, &format!("{}.memory.limit", prefix));
}

fn check_probe(report: &mut ValidationReport, probe: &ProbeSpec, prefix: &str, needs_delay: bool) {
    require(report, &probe.path, &format!("{}.path", prefix));
    require_positive(report, probe.port, &format!("{}.port", prefix));
    if needs_delay {
        require_positive(report, probe.initial_delay_seconds, &format!("{}.delay", prefix));
    }
    require_positive(report, probe.timeout_seconds, &format!("{}.timeout", prefix));
}

fn check_container(intent: &DeploymentIntent, report: &mut ValidationReport) {
    let container = &intent.container;
    require(report, &container.image_repository, "container.repository");
    require(report, &container.image_name, "container.name");
    require(report, &container.image_tag, "container.tag");
    require_positive(report, container.port, "container.port");

    check_resources(report, &container.cpu, &container.memory, "container");
    check_probe(report, &container.liveness_probe, "container.liveness", true);
    check_probe(report, &container.readiness_probe, "container.readiness", false);

    match container.metrics.scrape {
        Some(true) => {
            require(report, &container.metrics.path, "container.metrics.path");
            require_positive(report, container.metrics.port, "container.metrics.port");
        }
        Some(false) => {}
        None => report.error(ValidationError::required("container.metrics.scrape")),
    }
}

fn check_sidecar(report: &mut ValidationReport, sidecar: &SidecarSpec, prefix: &str) {
    let type_key = format!("{}.type", prefix);
    if sidecar.sidecar_type.is_unset() {
        report.error(ValidationError::required(type_key));
    } else {
        require_one_of(
            report,
            sidecar.sidecar_type.as_str(),
            SidecarType::ALLOWED,
            &type_key,
        );
    }

    check_resources(report, &sidecar.cpu, &sidecar.memory, prefix);

    if sidecar.sidecar_type == SidecarType::CloudSqlProxy {
        require(
            report,
            &sidecar.db_instance_connection_name,
            &format!("{}.dbInstanceConnectionName", prefix),
        );
        require_positive(
            report,
            sidecar.sql_proxy_port,
            &format!("{}.sqlproxyport", prefix),
        );
    }
}

fn check_sidecars(intent: &DeploymentIntent, report: &mut ValidationReport) {
    for (index, sidecar) in intent.sidecars.iter().enumerate() {
        check_sidecar(report, sidecar, &format!("sidecars[{}]", index));
    }
}

fn check_rollout(intent: &DeploymentIntent, report: &mut ValidationReport) {
    require_one_of(
        report,
        intent.strategy_type.as_str(),
        StrategyType::ALLOWED,
        "strategyType",
    );
    if intent.strategy_type == StrategyType::Recreate {
        return;
    }

    require(report, &intent.rolling_update.max_surge, "rollingUpdate.maxSurge");
    require(
        report,
        &intent.rolling_update.max_unavailable,
        "rollingUpdate.maxUnavailable",
    );
}

fn check_kind_specific(intent: &DeploymentIntent, report: &mut ValidationReport) {
    match intent.kind {
        Kind::CronJob => {
            require(report, &intent.schedule, "schedule");
            require_one_of(
                report,
                &intent.concurrency_policy,
                CONCURRENCY_POLICIES,
                "concurrencyPolicy",
            );
        }
        Kind::StatefulSet => {
            require_one_of(
                report,
                &intent.pod_management_policy,
                POD_MANAGEMENT_POLICIES,
                "podManagementPolicy",
            );
            require(report, &intent.storage_class, "storageClass");
            require(report, &intent.storage_size, "storageSize");
        }
        _ => {}
    }
}

fn check_request(intent: &DeploymentIntent, report: &mut ValidationReport) {
    let algorithm = &intent.request.load_balance_algorithm;
    if !algorithm.is_unset() && !algorithm.is_known() {
        require_one_of(
            report,
            algorithm.as_str(),
            LoadBalanceAlgorithm::ALLOWED,
            "request.loadbalance",
        );
    }
}

fn check_visibility_auth(intent: &DeploymentIntent, report: &mut ValidationReport) {
    match intent.visibility {
        Visibility::Iap => {
            if intent.iap_oauth_client_id.is_empty() {
                report.error(ValidationError::VisibilityAuth {
                    visibility: "iap",
                    key: "iapOauthCredentialsClientID",
                    hint: "provide the client id of the oauth credentials for the identity-aware proxy",
                });
            }
            if intent.iap_oauth_client_secret.is_empty() {
                report.error(ValidationError::VisibilityAuth {
                    visibility: "iap",
                    key: "iapOauthCredentialsClientSecret",
                    hint: "provide the client secret of the oauth credentials for the identity-aware proxy",
                });
            }
        }
        Visibility::Esp => {
            if intent.esp_endpoints_project_id.is_empty() {
                report.error(ValidationError::VisibilityAuth {
                    visibility: "esp",
                    key: "espEndpointsProjectID",
                    hint: "provide id of the 'endpoints' project",
                });
            }
        }
        Visibility::Apigee => {
            if intent.request.auth_secret.is_empty() {
                report.error(ValidationError::VisibilityAuth {
                    visibility: "apigee",
                    key: "request.authSecret",
                    hint: "provide the name of the secret holding the client certificate chain",
                });
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
