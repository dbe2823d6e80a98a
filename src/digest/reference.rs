// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Container image reference parsing.

const DIGEST_MARKER: &str = "@sha256:";
const DEFAULT_TAG: &str = "latest";

/// An image reference split the way digest pinning needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference<'a> {
    /// No image configured.
    Empty,
    /// Already pinned to a content digest; never looked up.
    Pinned(&'a str),
    /// Mutable tag form. A missing tag reads as `latest`.
    Tagged { repository: &'a str, tag: &'a str },
}

impl<'a> ImageReference<'a> {
    pub fn parse(image: &'a str) -> Self {
        if image.is_empty() {
            return Self::Empty;
        }
        // a registry port (`host:5000/repo`) sits before the last slash
        let name_start = image.rfind('/').map_or(0, |slash| slash + 1);
        // any digest algorithm counts as pinned
        if image[name_start..].contains('@') {
            return Self::Pinned(image);
        }

        match image[name_start..].rfind(':') {
            Some(colon) => {
                let split = name_start + colon;
                let tag = &image[split + 1..];
                Self::Tagged {
                    repository: &image[..split],
                    tag: if tag.is_empty() { DEFAULT_TAG } else { tag },
                }
            }
            None => Self::Tagged {
                repository: image,
                tag: DEFAULT_TAG,
            },
        }
    }
}

/// Strip an optional `sha256:` prefix and check the rest is hex.
pub fn normalize_digest(raw: &str) -> Option<&str> {
    let hex = raw.trim();
    let hex = hex.strip_prefix("sha256:").unwrap_or(hex);
    if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex)
    } else {
        None
    }
}

/// `repository@sha256:<hex>`.
pub fn pinned_reference(repository: &str, hex: &str) -> String {
    format!("{}{}{}", repository, DIGEST_MARKER, hex)
}
