// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Required-property validation of resolved deployment intents.
//!
//! Pure checks: nothing here mutates the intent. Every rule is evaluated so
//! the author sees all problems in one run.

pub mod host;
mod report;
mod rules;

pub use host::{validate_host, HostError};
pub use report::{ValidationError, ValidationReport, ValidationWarning};
pub use rules::validate;
