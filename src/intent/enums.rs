// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! String-backed enumerations of the intent schema.
//!
//! Every enum keeps unrecognised input verbatim in an `Unknown` variant so
//! that defaulting can pass it through and validation can report it. The
//! empty string is the "unset" value.

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Unrecognised value, or the empty string when unset.
            Unknown(String),
        }

        impl $name {
            /// All recognised wire values.
            pub const ALLOWED: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(raw) => raw,
                }
            }

            /// True when no value was supplied.
            pub fn is_unset(&self) -> bool {
                matches!(self, Self::Unknown(raw) if raw.is_empty())
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unknown(String::new())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(raw),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                // null reads as unset
                Ok(Option::<String>::deserialize(deserializer)?
                    .map(Self::from)
                    .unwrap_or_default())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Workload-controller family the descriptor targets.
    Kind {
        Deployment => "deployment",
        HeadlessDeployment => "headless-deployment",
        StatefulSet => "statefulset",
        Job => "job",
        CronJob => "cronjob",
        Config => "config",
    }
}

impl Kind {
    /// Job and CronJob share restart, completion and backoff settings.
    pub fn is_job_family(&self) -> bool {
        matches!(self, Self::Job | Self::CronJob)
    }

    /// Kinds that are reachable through an ingress and therefore need hosts.
    pub fn is_externally_facing(&self) -> bool {
        matches!(self, Self::Deployment | Self::StatefulSet)
    }
}

string_enum! {
    /// Network exposure mode of the deployed service.
    Visibility {
        Private => "private",
        Public => "public",
        PublicWhitelist => "public-whitelist",
        Apigee => "apigee",
        Esp => "esp",
        Iap => "iap",
    }
}

string_enum! {
    /// Release flow to run for this invocation.
    Action {
        DeploySimple => "deploy-simple",
        DeployCanary => "deploy-canary",
        DeployStable => "deploy-stable",
        RollbackCanary => "rollback-canary",
        RestartSimple => "restart-simple",
        RestartCanary => "restart-canary",
        RestartStable => "restart-stable",
    }
}

string_enum! {
    /// Auxiliary container flavour.
    SidecarType {
        Openresty => "openresty",
        Istio => "istio",
        Esp => "esp",
        CloudSqlProxy => "cloudsqlproxy",
    }
}

string_enum! {
    /// Upstream load-balancing algorithm of the ingress proxy.
    LoadBalanceAlgorithm {
        RoundRobin => "round_robin",
        Ewma => "ewma",
    }
}

string_enum! {
    /// Replacement strategy for the pods of a deployment.
    StrategyType {
        RollingUpdate => "RollingUpdate",
        Recreate => "Recreate",
    }
}

string_enum! {
    /// Update mode of the vertical pod autoscaler.
    UpdateMode {
        Off => "Off",
        Initial => "Initial",
        Recreate => "Recreate",
        Auto => "Auto",
    }
}
