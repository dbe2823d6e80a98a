// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment parameter resolution and validation.
//!
//! A sparse [`intent::DeploymentIntent`] written by a pipeline author is
//! completed by [`defaults::resolve`], checked by [`validation::validate`],
//! and has its sidecar images pinned by [`digest::DigestResolver`] before a
//! renderer turns it into cluster objects.

pub mod cli;
pub mod config;
pub mod defaults;
pub mod digest;
pub mod intent;
pub mod logging;
pub mod validation;

pub use defaults::{apply_credential_defaults, resolve, CredentialDefaults, Hints};
pub use digest::{DigestError, DigestResolver, RegistryLookup};
pub use intent::DeploymentIntent;
pub use validation::{validate, ValidationReport};
