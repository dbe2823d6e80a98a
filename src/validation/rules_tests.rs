// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for required-property validation.

use super::*;
use crate::defaults::{resolve, Hints};

fn resolved_with(git_name: &str) -> DeploymentIntent {
    let mut intent = DeploymentIntent::default();
    let hints = Hints {
        git_name: git_name.to_string(),
        build_version: "1.0.0".to_string(),
        ..Default::default()
    };
    resolve(&mut intent, &hints);
    intent
}

fn valid_intent() -> DeploymentIntent {
    let mut intent = resolved_with("myapp");
    intent.namespace = "mynamespace".to_string();
    intent.container.image_repository = "estafette".to_string();
    intent.hosts = vec!["gke.estafette.io".to_string()];
    intent
}

fn error_keys(report: &ValidationReport) -> Vec<String> {
    report
        .errors
        .iter()
        .filter_map(|error| match error {
            ValidationError::Required { key }
            | ValidationError::NotPositive { key }
            | ValidationError::NotAllowed { key, .. }
            | ValidationError::InvalidHost { key, .. } => Some(key.clone()),
            _ => None,
        })
        .collect()
}

fn sized_sidecar(sidecar_type: SidecarType) -> SidecarSpec {
    let mut sidecar = SidecarSpec::of_type(sidecar_type);
    sidecar.cpu = ResourceSpec::new("10m", "");
    sidecar.memory = ResourceSpec::new("10Mi", "50Mi");
    sidecar
}

#[test]
fn test_resolved_intent_is_valid() {
    let report = validate(&valid_intent());
    assert!(report.is_valid(), "{:?}", report.errors);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_cpu_limit_is_optional() {
    let intent = valid_intent();
    assert!(intent.container.cpu.limit.is_empty());
    assert!(validate(&intent).is_valid());
}

#[test]
fn test_git_name_fills_app_but_namespace_still_missing() {
    let intent = resolved_with("mygitrepo");
    assert_eq!(intent.app, "mygitrepo");

    let report = validate(&intent);
    assert!(!report.is_valid());
    assert!(!report.errors.contains(&ValidationError::MissingApp));
    assert!(report.errors.contains(&ValidationError::MissingNamespace));
}

#[test]
fn test_five_violations_give_five_errors() {
    let mut intent = valid_intent();
    intent.namespace.clear();
    intent.container.image_tag.clear();
    intent.autoscale.min_replicas = 0;
    intent.container.memory.limit.clear();
    intent.rolling_update.max_surge.clear();

    let (valid, errors, warnings) = validate(&intent).into_parts();
    assert!(!valid);
    assert_eq!(errors.len(), 5);
    assert!(warnings.is_empty());
}

#[test]
fn test_unresolved_intent_reports_everything() {
    let report = validate(&DeploymentIntent::default());
    let keys = error_keys(&report);

    assert!(report.errors.contains(&ValidationError::MissingApp));
    assert!(report.errors.contains(&ValidationError::MissingNamespace));
    for key in [
        "kind",
        "action",
        "visibility",
        "basepath",
        "autoscale.min",
        "autoscale.max",
        "autoscale.cpu",
        "container.repository",
        "container.name",
        "container.tag",
        "container.port",
        "container.cpu.request",
        "container.memory.request",
        "container.memory.limit",
        "container.liveness.path",
        "container.liveness.delay",
        "container.readiness.timeout",
        "container.metrics.scrape",
        "strategyType",
        "rollingUpdate.maxSurge",
        "rollingUpdate.maxUnavailable",
    ] {
        assert!(keys.iter().any(|k| k == key), "missing error for {}", key);
    }
    assert!(!keys.iter().any(|k| k == "container.cpu.limit"));
}

#[test]
fn test_metrics_checked_only_when_scraping() {
    let mut intent = valid_intent();
    intent.container.metrics.scrape = Some(false);
    intent.container.metrics.path.clear();
    intent.container.metrics.port = 0;
    assert!(validate(&intent).is_valid());

    intent.container.metrics.scrape = Some(true);
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["container.metrics.path", "container.metrics.port"]);

    intent.container.metrics.scrape = None;
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["container.metrics.scrape"]);
}

#[test]
fn test_hosts_required_for_externally_facing_kinds() {
    let mut intent = valid_intent();
    intent.hosts.clear();
    let report = validate(&intent);
    assert_eq!(
        report.errors,
        vec![ValidationError::MissingHosts {
            kind: "deployment".to_string()
        }]
    );

    intent.kind = Kind::StatefulSet;
    intent.pod_management_policy = "Parallel".to_string();
    intent.storage_class = "standard".to_string();
    intent.storage_size = "1Gi".to_string();
    assert_eq!(validate(&intent).errors.len(), 1);

    intent.kind = Kind::Job;
    assert!(validate(&intent).is_valid());
}

#[test]
fn test_invalid_hosts_reported_with_key() {
    let mut intent = valid_intent();
    intent.hosts.push("GKE.ESTAFETTE.IO".to_string());
    intent.hosts.push(format!("{}.estafette.io", "a".repeat(64)));
    intent.internal_hosts.push("my_app.internal".to_string());

    let report = validate(&intent);
    assert_eq!(error_keys(&report), vec!["hosts", "internalHosts"]);
    assert!(report.errors[0].to_string().contains("hosts entry"));
}

#[test]
fn test_unknown_visibility_rejected() {
    let mut intent = valid_intent();
    intent.visibility = Visibility::from("everywhere");
    let report = validate(&intent);
    assert_eq!(error_keys(&report), vec!["visibility"]);
    assert!(report.errors[0].to_string().contains("'everywhere'"));
}

#[test]
fn test_public_visibility_warns() {
    let mut intent = valid_intent();
    intent.visibility = Visibility::Public;
    let report = validate(&intent);
    assert!(report.is_valid());
    assert_eq!(report.warnings, vec![ValidationWarning::PublicVisibility]);
}

#[test]
fn test_unknown_kind_and_action_rejected() {
    let mut intent = valid_intent();
    intent.kind = Kind::from("daemonset");
    intent.action = Action::from("deploy-everywhere");
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["kind", "action"]);
}

#[test]
fn test_legacy_sidecar_warning() {
    let mut intent = DeploymentIntent::default();
    intent.sidecar = Some(SidecarSpec::of_type(SidecarType::Esp));
    resolve(&mut intent, &Hints::default());
    let report = validate(&intent);
    assert!(report.warnings.contains(&ValidationWarning::LegacySidecar));

    let mut intent = DeploymentIntent::default();
    intent.sidecar = Some(SidecarSpec::of_type(SidecarType::Esp));
    intent.sidecars = vec![SidecarSpec::of_type(SidecarType::Istio)];
    resolve(&mut intent, &Hints::default());
    let report = validate(&intent);
    assert!(!report.warnings.contains(&ValidationWarning::LegacySidecar));
}

#[test]
fn test_legacy_sidecar_warning_before_resolution() {
    let mut intent = valid_intent();
    intent.sidecars.clear();
    intent.sidecar = Some(sized_sidecar(SidecarType::Istio));
    let report = validate(&intent);
    assert!(report.is_valid());
    assert_eq!(report.warnings, vec![ValidationWarning::LegacySidecar]);

    intent.sidecar = Some(SidecarSpec::default());
    assert!(validate(&intent).warnings.is_empty());
}

#[test]
fn test_sidecar_requirements() {
    let mut intent = valid_intent();
    let mut cloudsql = sized_sidecar(SidecarType::CloudSqlProxy);
    cloudsql.sql_proxy_port = 5432;
    intent.sidecars.push(cloudsql);
    intent.sidecars.push(SidecarSpec::of_type(SidecarType::from("envoy")));

    let keys = error_keys(&validate(&intent));
    assert_eq!(
        keys,
        vec![
            "sidecars[1].dbInstanceConnectionName",
            "sidecars[2].type",
            "sidecars[2].cpu.request",
            "sidecars[2].memory.request",
            "sidecars[2].memory.limit",
        ]
    );
}

#[test]
fn test_untyped_sidecar_rejected() {
    let mut intent = valid_intent();
    intent.sidecars.push(sized_sidecar(SidecarType::default()));
    let report = validate(&intent);
    assert_eq!(
        report.errors,
        vec![ValidationError::Required {
            key: "sidecars[1].type".to_string()
        }]
    );
}

#[test]
fn test_recreate_strategy_skips_rolling_update() {
    let mut intent = valid_intent();
    assert_eq!(intent.strategy_type, StrategyType::RollingUpdate);
    intent.rolling_update.max_surge.clear();
    intent.rolling_update.max_unavailable.clear();
    assert_eq!(
        error_keys(&validate(&intent)),
        vec!["rollingUpdate.maxSurge", "rollingUpdate.maxUnavailable"]
    );

    intent.strategy_type = StrategyType::Recreate;
    assert!(validate(&intent).is_valid());
}

#[test]
fn test_unknown_strategy_type_rejected() {
    let mut intent = valid_intent();
    intent.strategy_type = StrategyType::from("BlueGreen");
    assert_eq!(error_keys(&validate(&intent)), vec!["strategyType"]);
}

#[test]
fn test_cronjob_rules() {
    let mut intent = valid_intent();
    intent.kind = Kind::CronJob;
    intent.concurrency_policy = "Sometimes".to_string();
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["schedule", "concurrencyPolicy"]);

    intent.schedule = "*/5 * * * *".to_string();
    intent.concurrency_policy = "Forbid".to_string();
    assert!(validate(&intent).is_valid());
}

#[test]
fn test_statefulset_rules() {
    let mut intent = valid_intent();
    intent.kind = Kind::StatefulSet;
    intent.pod_management_policy = "Sequential".to_string();
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["podManagementPolicy", "storageClass", "storageSize"]);
}

#[test]
fn test_load_balance_algorithm() {
    let mut intent = valid_intent();
    intent.request.load_balance_algorithm = LoadBalanceAlgorithm::Ewma;
    assert!(validate(&intent).is_valid());

    intent.request.load_balance_algorithm = LoadBalanceAlgorithm::from("least_conn");
    let keys = error_keys(&validate(&intent));
    assert_eq!(keys, vec!["request.loadbalance"]);
}

#[test]
fn test_iap_requires_oauth_credentials() {
    let mut intent = valid_intent();
    intent.visibility = Visibility::Iap;
    assert_eq!(validate(&intent).errors.len(), 2);

    intent.iap_oauth_client_id = "client-id".to_string();
    intent.iap_oauth_client_secret = "client-secret".to_string();
    assert!(validate(&intent).is_valid());
}

#[test]
fn test_esp_requires_endpoints_project() {
    let mut intent = valid_intent();
    intent.visibility = Visibility::Esp;
    let report = validate(&intent);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].to_string(),
        "With visibility 'esp' property espEndpointsProjectID is required; provide id of the 'endpoints' project"
    );
}

#[test]
fn test_apigee_requires_auth_secret() {
    let mut intent = valid_intent();
    intent.visibility = Visibility::Apigee;
    let report = validate(&intent);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].to_string().contains("request.authSecret"));

    intent.request.auth_secret = "apigee-client-cert".to_string();
    assert!(validate(&intent).is_valid());
}
