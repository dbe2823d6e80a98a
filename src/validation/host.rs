// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! DNS host name checks.

use thiserror::Error;

/// Maximum length of a full host name.
pub const MAX_HOST_LENGTH: usize = 253;

/// Maximum length of a single dot-separated label.
pub const MAX_LABEL_LENGTH: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host is empty")]
    Empty,

    #[error("host is {length} characters long, at most {max} allowed")]
    TooLong { length: usize, max: usize },

    #[error("label '{label}' is {length} characters long, at most {max} allowed")]
    LabelTooLong {
        label: String,
        length: usize,
        max: usize,
    },

    #[error("label '{label}' must consist of alphanumerics and hyphens, starting and ending with an alphanumeric")]
    InvalidLabel { label: String },
}

/// Validate a host name against DNS rules.
///
/// Case-insensitive: `GKE.ESTAFETTE.IO` is as valid as `gke.estafette.io`.
pub fn validate_host(host: &str) -> Result<(), HostError> {
    if host.is_empty() {
        return Err(HostError::Empty);
    }

    if host.len() > MAX_HOST_LENGTH {
        return Err(HostError::TooLong {
            length: host.len(),
            max: MAX_HOST_LENGTH,
        });
    }

    let host = host.to_ascii_lowercase();
    for label in host.split('.') {
        validate_label(label)?;
    }

    Ok(())
}

fn validate_label(label: &str) -> Result<(), HostError> {
    if label.len() > MAX_LABEL_LENGTH {
        return Err(HostError::LabelTooLong {
            label: label.to_string(),
            length: label.len(),
            max: MAX_LABEL_LENGTH,
        });
    }

    let valid_chars = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    let valid = !label.is_empty()
        && label.chars().all(valid_chars)
        && !label.starts_with('-')
        && !label.ends_with('-');
    if !valid {
        return Err(HostError::InvalidLabel {
            label: label.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
