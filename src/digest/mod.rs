// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Digest pinning of sidecar images.

pub mod reference;
mod registry;
mod resolver;

pub use registry::{LookupError, RegistryLookup, StaticRegistry};
pub use resolver::{DigestError, DigestResolver, DEFAULT_DIGEST_CONCURRENCY};
