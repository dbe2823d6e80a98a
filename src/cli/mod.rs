// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the deploy-intent CLI.

pub mod commands;
pub mod env;
pub mod report_format;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::digest::DigestError;

pub use commands::{run_check, run_resolve};

pub const EXIT_OK: u8 = 0;
pub const EXIT_INVALID: u8 = 1;
pub const EXIT_INPUT: u8 = 2;
pub const EXIT_DIGEST: u8 = 3;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Failed to read intent file {}: {source}", path.display())]
    ReadIntent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse intent file {}: {source}", path.display())]
    ParseIntent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Digest pinning needs a registry file; set DEPLOY_INTENT_REGISTRY_FILE")]
    MissingRegistry,

    #[error("Failed to serialize resolved intent: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Digest(_) => EXIT_DIGEST,
            _ => EXIT_INPUT,
        }
    }
}
