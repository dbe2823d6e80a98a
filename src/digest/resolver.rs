// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pins sidecar image tags to content digests.

use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;

use super::reference::{normalize_digest, pinned_reference, ImageReference};
use super::registry::{LookupError, RegistryLookup};
use crate::intent::SidecarSpec;

/// Default number of registry lookups in flight.
pub const DEFAULT_DIGEST_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("digest lookup for image {image} failed: {source}")]
    Lookup {
        image: String,
        #[source]
        source: LookupError,
    },

    #[error("registry returned malformed digest '{digest}' for image {image}")]
    MalformedDigest { image: String, digest: String },
}

/// Rewrites tagged sidecar images to `repository@sha256:<hex>`.
pub struct DigestResolver<L> {
    lookup: L,
    concurrency: usize,
}

impl<L: RegistryLookup> DigestResolver<L> {
    /// A concurrency of zero is treated as one.
    pub fn new(lookup: L, concurrency: usize) -> Self {
        Self {
            lookup,
            concurrency: concurrency.max(1),
        }
    }

    /// Pin every tagged sidecar image.
    ///
    /// Pinned and empty images are skipped without a lookup. Any failed or
    /// malformed lookup fails the whole call and leaves `sidecars` untouched.
    pub async fn resolve(&self, sidecars: &mut [SidecarSpec]) -> Result<(), DigestError> {
        let pending: Vec<(usize, String, String)> = sidecars
            .iter()
            .enumerate()
            .filter_map(|(index, sidecar)| match ImageReference::parse(&sidecar.image) {
                ImageReference::Tagged { repository, tag } => {
                    Some((index, repository.to_string(), tag.to_string()))
                }
                ImageReference::Pinned(_) | ImageReference::Empty => None,
            })
            .collect();

        if pending.is_empty() {
            tracing::debug!("no sidecar images to pin");
            return Ok(());
        }

        let lookup = &self.lookup;
        let pinned: Vec<(usize, String)> = stream::iter(pending)
            .map(move |(index, repository, tag)| async move {
                let image = format!("{}:{}", repository, tag);
                let raw = lookup
                    .lookup(&repository, &tag)
                    .await
                    .map_err(|source| DigestError::Lookup {
                        image: image.clone(),
                        source,
                    })?;
                let hex = normalize_digest(&raw).ok_or_else(|| DigestError::MalformedDigest {
                    image: image.clone(),
                    digest: raw.clone(),
                })?;
                Ok::<_, DigestError>((index, pinned_reference(&repository, hex)))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        for (index, image) in pinned {
            tracing::info!(from = %sidecars[index].image, to = %image, "pinned sidecar image");
            sidecars[index].image = image;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
