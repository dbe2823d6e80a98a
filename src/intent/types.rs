// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment intent schema.
//!
//! Field names follow the stage properties a pipeline author writes. Every
//! block is optional on input; defaulting fills it in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::de;
use super::enums::{
    Action, Kind, LoadBalanceAlgorithm, SidecarType, StrategyType, UpdateMode, Visibility,
};

/// Root aggregate for one deployment invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentIntent {
    pub action: Action,
    pub app: String,
    pub namespace: String,
    pub kind: Kind,
    #[serde(deserialize_with = "de::null_as_default")]
    pub labels: BTreeMap<String, String>,
    pub visibility: Visibility,
    #[serde(deserialize_with = "de::null_as_default")]
    pub hosts: Vec<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub internal_hosts: Vec<String>,
    pub basepath: String,
    #[serde(rename = "trustedIPRanges", deserialize_with = "de::null_as_default")]
    pub trusted_ip_ranges: Vec<String>,
    pub build_version: String,

    #[serde(deserialize_with = "de::null_as_default")]
    pub autoscale: AutoscaleSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub vertical_pod_autoscaler: VpaSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub request: RequestSpec,
    pub strategy_type: StrategyType,
    #[serde(deserialize_with = "de::null_as_default")]
    pub rolling_update: RollingUpdateSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub container: ContainerSpec,

    /// Deprecated singular sidecar; folded into `sidecars` during defaulting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar: Option<SidecarSpec>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sidecars: Vec<SidecarSpec>,
    #[serde(rename = "injecthttpproxysidecar", deserialize_with = "de::opt_bool_or_string")]
    pub inject_http_proxy_sidecar: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub probe_service: Option<bool>,

    // job and cronjob
    pub schedule: String,
    pub concurrency_policy: String,
    pub restart_policy: String,
    #[serde(deserialize_with = "de::int_or_string")]
    pub completions: i32,
    #[serde(deserialize_with = "de::int_or_string")]
    pub parallelism: i32,
    #[serde(deserialize_with = "de::opt_int_or_string")]
    pub backoff_limit: Option<i32>,

    // statefulset
    pub pod_management_policy: String,
    pub storage_class: String,
    pub storage_size: String,
    pub storage_mount_path: String,

    // visibility specific authentication
    #[serde(rename = "iapOauthCredentialsClientID")]
    pub iap_oauth_client_id: String,
    #[serde(rename = "iapOauthCredentialsClientSecret")]
    pub iap_oauth_client_secret: String,
    #[serde(rename = "espEndpointsProjectID")]
    pub esp_endpoints_project_id: String,

    // workload identity
    pub google_cloud_credentials_app: String,
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub disable_service_account_key_rotation: Option<bool>,

    #[serde(deserialize_with = "de::null_as_default")]
    pub configs: MountSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub secrets: MountSpec,

    /// Set when the singular sidecar field was the only sidecar source.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub legacy_sidecar_used: bool,
}

/// Main application container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerSpec {
    #[serde(rename = "repository")]
    pub image_repository: String,
    #[serde(rename = "name")]
    pub image_name: String,
    #[serde(rename = "tag")]
    pub image_tag: String,
    pub image_pull_policy: String,
    #[serde(deserialize_with = "de::int_or_string")]
    pub port: i32,
    #[serde(deserialize_with = "de::null_as_default")]
    pub env: BTreeMap<String, String>,

    #[serde(deserialize_with = "de::null_as_default")]
    pub cpu: ResourceSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub memory: ResourceSpec,
    #[serde(rename = "liveness", deserialize_with = "de::null_as_default")]
    pub liveness_probe: ProbeSpec,
    #[serde(rename = "readiness", deserialize_with = "de::null_as_default")]
    pub readiness_probe: ProbeSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub metrics: MetricsSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub lifecycle: LifecycleSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub additional_ports: Vec<AdditionalPort>,
}

/// Request/limit pair for CPU or memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSpec {
    pub request: String,
    pub limit: String,
    /// Set when `request` was filled in by defaulting rather than declared.
    #[serde(rename = "requestDefaulted", skip_serializing_if = "std::ops::Not::not")]
    pub request_defaulted: bool,
}

impl ResourceSpec {
    pub fn new(request: &str, limit: &str) -> Self {
        Self {
            request: request.to_string(),
            limit: limit.to_string(),
            request_defaulted: false,
        }
    }
}

/// Liveness or readiness probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeSpec {
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub enabled: Option<bool>,
    pub path: String,
    #[serde(deserialize_with = "de::int_or_string")]
    pub port: i32,
    #[serde(rename = "delay", deserialize_with = "de::int_or_string")]
    pub initial_delay_seconds: i32,
    #[serde(rename = "timeout", deserialize_with = "de::int_or_string")]
    pub timeout_seconds: i32,
    #[serde(rename = "period", deserialize_with = "de::int_or_string")]
    pub period_seconds: i32,
    #[serde(deserialize_with = "de::int_or_string")]
    pub failure_threshold: i32,
    #[serde(deserialize_with = "de::int_or_string")]
    pub success_threshold: i32,
}

/// Prometheus scrape settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSpec {
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub scrape: Option<bool>,
    pub path: String,
    #[serde(deserialize_with = "de::int_or_string")]
    pub port: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifecycleSpec {
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub prestop_sleep: Option<bool>,
    #[serde(deserialize_with = "de::opt_int_or_string")]
    pub prestop_sleep_seconds: Option<i32>,
}

/// Extra container port exposed next to the main port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalPort {
    pub name: String,
    #[serde(deserialize_with = "de::int_or_string")]
    pub port: i32,
    pub protocol: String,
    pub visibility: Visibility,
}

/// Horizontal autoscaling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoscaleSpec {
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub enabled: Option<bool>,
    #[serde(rename = "min", deserialize_with = "de::int_or_string")]
    pub min_replicas: i32,
    #[serde(rename = "max", deserialize_with = "de::int_or_string")]
    pub max_replicas: i32,
    #[serde(rename = "cpu", deserialize_with = "de::int_or_string")]
    pub cpu_percentage: i32,
    #[serde(deserialize_with = "de::null_as_default")]
    pub safety: SafetySpec,
}

/// Request-rate based guard against scaling down under load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafetySpec {
    #[serde(deserialize_with = "de::bool_or_string")]
    pub enabled: bool,
    #[serde(rename = "promquery")]
    pub prom_query: String,
    pub ratio: String,
    pub scale_down_ratio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VpaSpec {
    #[serde(deserialize_with = "de::opt_bool_or_string")]
    pub enabled: Option<bool>,
    pub update_mode: UpdateMode,
}

/// Ingress request handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestSpec {
    pub timeout: String,
    pub max_body_size: String,
    pub proxy_buffer_size: String,
    #[serde(rename = "loadbalance")]
    pub load_balance_algorithm: LoadBalanceAlgorithm,
    #[serde(deserialize_with = "de::int_or_string")]
    pub verify_depth: i32,
    /// Secret holding the client certificate chain, required for apigee.
    pub auth_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollingUpdateSpec {
    pub max_surge: String,
    pub max_unavailable: String,
    pub timeout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountSpec {
    pub mount_path: String,
}

/// Auxiliary container deployed alongside the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidecarSpec {
    #[serde(rename = "type")]
    pub sidecar_type: SidecarType,
    pub image: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub cpu: ResourceSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub memory: ResourceSpec,
    #[serde(deserialize_with = "de::null_as_default")]
    pub env: BTreeMap<String, String>,

    // openresty
    pub health_check_path: String,

    // cloudsqlproxy
    pub db_instance_connection_name: String,
    #[serde(rename = "sqlproxyport", deserialize_with = "de::int_or_string")]
    pub sql_proxy_port: i32,
    #[serde(
        rename = "sqlproxyterminationtimeoutseconds",
        deserialize_with = "de::int_or_string"
    )]
    pub sql_proxy_termination_timeout_seconds: i32,
}

impl SidecarSpec {
    /// A sidecar of the given type with everything else unset.
    pub fn of_type(sidecar_type: SidecarType) -> Self {
        Self {
            sidecar_type,
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
