// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Built-in default values.

pub const DEFAULT_IMAGE_PULL_POLICY: &str = "IfNotPresent";
pub const DEFAULT_CONTAINER_PORT: i32 = 5000;

pub const DEFAULT_CPU_REQUEST: &str = "100m";
pub const DEFAULT_MEMORY: &str = "128Mi";

pub const DEFAULT_MIN_REPLICAS: i32 = 3;
pub const DEFAULT_MAX_REPLICAS: i32 = 100;
pub const DEFAULT_CPU_PERCENTAGE: i32 = 80;
pub const DEFAULT_SAFETY_RATIO: &str = "1";

pub const DEFAULT_LIVENESS_PATH: &str = "/liveness";
pub const DEFAULT_READINESS_PATH: &str = "/readiness";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";
pub const DEFAULT_LIVENESS_DELAY_SECONDS: i32 = 30;
pub const DEFAULT_PROBE_TIMEOUT_SECONDS: i32 = 1;
pub const DEFAULT_PROBE_PERIOD_SECONDS: i32 = 10;
pub const DEFAULT_FAILURE_THRESHOLD: i32 = 3;
pub const DEFAULT_SUCCESS_THRESHOLD: i32 = 1;
pub const DEFAULT_PRESTOP_SLEEP_SECONDS: i32 = 20;

pub const DEFAULT_REQUEST_TIMEOUT: &str = "60s";
pub const DEFAULT_MAX_BODY_SIZE: &str = "128m";
pub const DEFAULT_PROXY_BUFFER_SIZE: &str = "4k";
pub const DEFAULT_APIGEE_VERIFY_DEPTH: i32 = 3;

pub const DEFAULT_MAX_SURGE: &str = "25%";
pub const DEFAULT_MAX_UNAVAILABLE: &str = "0";
pub const DEFAULT_ROLLOUT_TIMEOUT: &str = "5m";

pub const DEFAULT_DISABLE_SERVICE_ACCOUNT_KEY_ROTATION: bool = true;

pub const DEFAULT_BASEPATH: &str = "/";
pub const DEFAULT_CONFIGS_MOUNT_PATH: &str = "/configs";
pub const DEFAULT_SECRETS_MOUNT_PATH: &str = "/secrets";
pub const DEFAULT_PORT_PROTOCOL: &str = "TCP";

pub const DEFAULT_CONCURRENCY_POLICY: &str = "Allow";
pub const DEFAULT_RESTART_POLICY: &str = "OnFailure";
pub const DEFAULT_COMPLETIONS: i32 = 1;
pub const DEFAULT_PARALLELISM: i32 = 1;
pub const DEFAULT_BACKOFF_LIMIT: i32 = 6;

pub const DEFAULT_POD_MANAGEMENT_POLICY: &str = "Parallel";
pub const DEFAULT_STORAGE_CLASS: &str = "standard";
pub const DEFAULT_STORAGE_SIZE: &str = "1Gi";
pub const DEFAULT_STORAGE_MOUNT_PATH: &str = "/data";

/// estafette/openresty-sidecar:1.5.8.2
pub const DEFAULT_OPENRESTY_IMAGE: &str = "estafette/openresty-sidecar@sha256:2aa9f2c8c3f506e0f6cc70871701b5ac81aa0f12e8574c7b8213e4d0379d2ddd";
pub const DEFAULT_SIDECAR_CPU_REQUEST: &str = "10m";
pub const DEFAULT_SIDECAR_MEMORY_REQUEST: &str = "10Mi";
pub const DEFAULT_SIDECAR_MEMORY_LIMIT: &str = "50Mi";
pub const DEFAULT_SQL_PROXY_PORT: i32 = 5432;
pub const DEFAULT_SQL_PROXY_TERMINATION_TIMEOUT_SECONDS: i32 = 60;

pub const PIPELINE_LABEL: &str = "estafette.io/pipeline";
pub const PIPELINE_BASE64_LABEL: &str = "estafette.io/pipeline-base64";

/// Cloudflare edge ranges, trusted to set forwarded-for headers.
pub const DEFAULT_TRUSTED_IP_RANGES: [&str; 14] = [
    "103.21.244.0/22",
    "103.22.200.0/22",
    "103.31.4.0/22",
    "104.16.0.0/12",
    "108.162.192.0/18",
    "131.0.72.0/22",
    "141.101.64.0/18",
    "162.158.0.0/15",
    "172.64.0.0/13",
    "173.245.48.0/20",
    "188.114.96.0/20",
    "190.93.240.0/20",
    "197.234.240.0/22",
    "198.41.128.0/17",
];

/// Request-rate query used by the autoscaler safety guard.
pub fn default_safety_prom_query(app: &str) -> String {
    format!(
        "sum(rate(nginx_http_requests_total{{app='{}'}}[5m])) by (app)",
        app
    )
}
