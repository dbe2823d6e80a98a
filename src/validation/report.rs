// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation outcome types.

use thiserror::Error;

use super::host::HostError;

/// A violation that blocks deployment. Messages name the configuration key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Application name is required; either define an app label or use app property on this stage")]
    MissingApp,

    #[error("Namespace is required; either use credentials with a defaultNamespace or set it via namespace property on this stage")]
    MissingNamespace,

    #[error("At least one host is required for kind '{kind}'; set it via hosts array property on this stage")]
    MissingHosts { kind: String },

    #[error("{key} is required; set it via {key} property on this stage")]
    Required { key: String },

    #[error("{key} must be larger than zero; set it via {key} property on this stage")]
    NotPositive { key: String },

    #[error("{key} value '{value}' is not supported; allowed values are {allowed}")]
    NotAllowed {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("{key} entry '{host}' is not a valid host: {source}")]
    InvalidHost {
        key: String,
        host: String,
        #[source]
        source: HostError,
    },

    #[error("With visibility '{visibility}' property {key} is required; {hint}")]
    VisibilityAuth {
        visibility: &'static str,
        key: &'static str,
        hint: &'static str,
    },
}

impl ValidationError {
    pub(super) fn required(key: impl Into<String>) -> Self {
        Self::Required { key: key.into() }
    }

    pub(super) fn not_positive(key: impl Into<String>) -> Self {
        Self::NotPositive { key: key.into() }
    }

    pub(super) fn not_allowed(key: impl Into<String>, value: &str, allowed: &[&str]) -> Self {
        let shown = if value.is_empty() { "<empty>" } else { value };
        Self::NotAllowed {
            key: key.into(),
            value: shown.to_string(),
            allowed: allowed.join(", "),
        }
    }
}

/// Advisory finding; deployment proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("Property sidecar is deprecated; use the sidecars array property on this stage instead")]
    LegacySidecar,

    #[error("With visibility 'public' the application is reachable from anywhere on the internet; consider public-whitelist, iap or esp")]
    PublicVisibility,
}

/// All findings of one validation run, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when no blocking error was found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the `(valid, errors, warnings)` triple.
    pub fn into_parts(self) -> (bool, Vec<ValidationError>, Vec<ValidationWarning>) {
        (self.is_valid(), self.errors, self.warnings)
    }

    pub(super) fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(super) fn warn(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}
