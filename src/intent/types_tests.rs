// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for intent deserialization.

use super::*;

fn parse(json: &str) -> DeploymentIntent {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_empty_object_is_all_defaults() {
    let intent = parse("{}");
    assert_eq!(intent, DeploymentIntent::default());
    assert!(intent.kind.is_unset());
    assert!(intent.visibility.is_unset());
    assert!(intent.sidecar.is_none());
}

#[test]
fn test_numbers_accept_numeric_strings() {
    let intent = parse(
        r#"{
            "container": {"port": "8080", "liveness": {"delay": 15, "timeout": "3"}},
            "autoscale": {"min": "2", "max": 10, "cpu": "60"}
        }"#,
    );
    assert_eq!(intent.container.port, 8080);
    assert_eq!(intent.container.liveness_probe.initial_delay_seconds, 15);
    assert_eq!(intent.container.liveness_probe.timeout_seconds, 3);
    assert_eq!(intent.autoscale.min_replicas, 2);
    assert_eq!(intent.autoscale.max_replicas, 10);
    assert_eq!(intent.autoscale.cpu_percentage, 60);
}

#[test]
fn test_invalid_numeric_string_rejected() {
    let result: Result<DeploymentIntent, _> =
        serde_json::from_str(r#"{"container": {"port": "http"}}"#);
    assert!(result.is_err());
}

#[test]
fn test_null_lists_and_maps_read_as_empty() {
    let intent = parse(
        r#"{"hosts": null, "labels": null, "sidecars": null, "trustedIPRanges": null, "container": null}"#,
    );
    assert!(intent.hosts.is_empty());
    assert!(intent.labels.is_empty());
    assert!(intent.sidecars.is_empty());
    assert!(intent.trusted_ip_ranges.is_empty());
    assert_eq!(intent.container, ContainerSpec::default());
}

#[test]
fn test_tri_state_booleans() {
    let intent = parse(
        r#"{
            "backoffLimit": 0,
            "injecthttpproxysidecar": "false",
            "container": {"metrics": {"scrape": null}, "readiness": {"enabled": true}}
        }"#,
    );
    assert_eq!(intent.backoff_limit, Some(0));
    assert_eq!(intent.inject_http_proxy_sidecar, Some(false));
    assert_eq!(intent.container.metrics.scrape, None);
    assert_eq!(intent.container.readiness_probe.enabled, Some(true));
    assert_eq!(intent.container.liveness_probe.enabled, None);
}

#[test]
fn test_unknown_enum_values_are_kept_verbatim() {
    let intent = parse(r#"{"kind": "daemonset", "visibility": "everywhere"}"#);
    assert_eq!(intent.kind, Kind::Unknown("daemonset".to_string()));
    assert_eq!(intent.visibility, Visibility::Unknown("everywhere".to_string()));
    assert!(!intent.visibility.is_unset());
    assert!(!intent.visibility.is_known());
}

#[test]
fn test_known_enum_values() {
    let intent = parse(
        r#"{"kind": "headless-deployment", "visibility": "public-whitelist", "action": "rollback-canary",
            "request": {"loadbalance": "ewma"}}"#,
    );
    assert_eq!(intent.kind, Kind::HeadlessDeployment);
    assert_eq!(intent.visibility, Visibility::PublicWhitelist);
    assert_eq!(intent.action, Action::RollbackCanary);
    assert_eq!(intent.request.load_balance_algorithm, LoadBalanceAlgorithm::Ewma);
}

#[test]
fn test_sidecar_fields() {
    let intent = parse(
        r#"{
            "sidecar": {"type": "openresty", "image": "estafette/openresty-sidecar:1.13.6.2-alpine"},
            "sidecars": [
                {"type": "cloudsqlproxy", "dbInstanceConnectionName": "project:region:db", "sqlproxyport": "5433"}
            ]
        }"#,
    );
    let legacy = intent.sidecar.as_ref().unwrap();
    assert_eq!(legacy.sidecar_type, SidecarType::Openresty);
    assert_eq!(intent.sidecars.len(), 1);
    assert_eq!(intent.sidecars[0].sidecar_type, SidecarType::CloudSqlProxy);
    assert_eq!(intent.sidecars[0].db_instance_connection_name, "project:region:db");
    assert_eq!(intent.sidecars[0].sql_proxy_port, 5433);
}

#[test]
fn test_serialize_uses_wire_names() {
    let mut intent = DeploymentIntent::default();
    intent.kind = Kind::CronJob;
    intent.visibility = Visibility::Iap;
    intent.container.image_repository = "estafette".to_string();
    intent.trusted_ip_ranges = vec!["10.0.0.0/8".to_string()];

    let json = serde_json::to_string(&intent).unwrap();
    assert!(json.contains("\"kind\":\"cronjob\""));
    assert!(json.contains("\"visibility\":\"iap\""));
    assert!(json.contains("\"repository\":\"estafette\""));
    assert!(json.contains("\"trustedIPRanges\":[\"10.0.0.0/8\"]"));
    assert!(!json.contains("legacySidecarUsed"));
    assert!(!json.contains("\"sidecar\":"));
}

#[test]
fn test_defaulting_markers_survive_json() {
    let mut intent = DeploymentIntent::default();
    intent.legacy_sidecar_used = true;
    intent.container.cpu.request = "100m".to_string();
    intent.container.cpu.request_defaulted = true;

    let json = serde_json::to_string(&intent).unwrap();
    assert!(json.contains("\"legacySidecarUsed\":true"));
    assert!(json.contains("\"requestDefaulted\":true"));

    let reloaded: DeploymentIntent = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, intent);
}

#[test]
fn test_new_workload_fields_parse() {
    let intent = parse(
        r#"{
            "strategyType": "Recreate",
            "googleCloudCredentialsApp": "shared",
            "disableServiceAccountKeyRotation": "false"
        }"#,
    );
    assert_eq!(intent.strategy_type, StrategyType::Recreate);
    assert_eq!(intent.google_cloud_credentials_app, "shared");
    assert_eq!(intent.disable_service_account_key_rotation, Some(false));
}

#[test]
fn test_kind_groups() {
    assert!(Kind::Job.is_job_family());
    assert!(Kind::CronJob.is_job_family());
    assert!(!Kind::Deployment.is_job_family());
    assert!(Kind::Deployment.is_externally_facing());
    assert!(Kind::StatefulSet.is_externally_facing());
    assert!(!Kind::HeadlessDeployment.is_externally_facing());
}
