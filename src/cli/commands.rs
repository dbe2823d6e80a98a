// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! `check` and `resolve` command implementations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::env::{credential_defaults_from_env, hints_from_env};
use super::report_format::{eprint_report, print_report};
use super::{CliError, EXIT_INVALID, EXIT_OK};
use crate::config::EngineConfig;
use crate::defaults::{apply_credential_defaults, resolve};
use crate::digest::{DigestResolver, StaticRegistry};
use crate::intent::DeploymentIntent;
use crate::validation::{validate, ValidationReport};

/// Parsed arguments of `check` and `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub intent_path: PathBuf,
    pub pin_digests: bool,
}

/// Parse the arguments following the command name.
pub fn parse_args(args: &[String], allow_pin: bool) -> Result<Invocation, CliError> {
    let mut intent_path = None;
    let mut pin_digests = false;

    for arg in args {
        match arg.as_str() {
            "--pin-digests" if allow_pin => pin_digests = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownArgument(flag.to_string()));
            }
            path if intent_path.is_none() => intent_path = Some(PathBuf::from(path)),
            extra => return Err(CliError::UnknownArgument(extra.to_string())),
        }
    }

    Ok(Invocation {
        intent_path: intent_path.ok_or(CliError::MissingArgument("<intent.json>"))?,
        pin_digests,
    })
}

pub fn load_intent(path: &Path) -> Result<DeploymentIntent, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadIntent {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::ParseIntent {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, default and validate an intent file.
pub fn prepare(
    path: &Path,
    env: &HashMap<String, String>,
) -> Result<(DeploymentIntent, ValidationReport), CliError> {
    let mut intent = load_intent(path)?;
    resolve(&mut intent, &hints_from_env(env));
    apply_credential_defaults(&mut intent, &credential_defaults_from_env(env));
    let report = validate(&intent);
    tracing::debug!(
        path = %path.display(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated deployment intent"
    );
    Ok((intent, report))
}

/// Resolve and validate; print the findings.
pub fn run_check(args: &[String], env: &HashMap<String, String>) -> Result<u8, CliError> {
    let invocation = parse_args(args, false)?;
    let (_, report) = prepare(&invocation.intent_path, env)?;
    print_report(&report);
    Ok(if report.is_valid() { EXIT_OK } else { EXIT_INVALID })
}

/// Resolve, validate and optionally pin digests; print the resolved intent.
pub async fn run_resolve(
    args: &[String],
    env: &HashMap<String, String>,
    config: &EngineConfig,
) -> Result<u8, CliError> {
    let invocation = parse_args(args, true)?;
    let (mut intent, report) = prepare(&invocation.intent_path, env)?;
    if !report.is_valid() {
        eprint_report(&report);
        return Ok(EXIT_INVALID);
    }
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    if invocation.pin_digests {
        let registry_file = config
            .registry_file
            .as_deref()
            .ok_or(CliError::MissingRegistry)?;
        let registry = StaticRegistry::load(registry_file)?;
        let resolver = DigestResolver::new(registry, config.digest_concurrency);
        resolver.resolve(&mut intent.sidecars).await?;
    }

    println!("{}", render(&intent)?);
    Ok(EXIT_OK)
}

pub fn render(intent: &DeploymentIntent) -> Result<String, CliError> {
    serde_json::to_string_pretty(intent).map_err(CliError::Serialize)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
