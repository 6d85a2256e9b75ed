//! Manifest document types and URL building.

use serde::{Deserialize, Serialize};

use crate::manifest::tier::Tier;

/// Manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// One avatar image in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarEntry {
    /// `<tier>/<filename>`.
    pub key: String,
    pub tier: Tier,
    /// Absolute public URL.
    pub url: String,
}

impl AvatarEntry {
    /// Build the entry for `filename` in `tier`.
    pub fn new(base_url: &str, tier: Tier, filename: &str) -> Self {
        let key = format!("{}/{}", tier.dir_name(), filename);
        let url = join_url(base_url, &key);
        Self { key, tier, url }
    }
}

/// The complete manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarManifest {
    pub version: u32,
    pub base_url: String,
    pub count: usize,
    pub avatars: Vec<AvatarEntry>,
}

impl AvatarManifest {
    /// Wrap `avatars` in a document; `count` is derived.
    pub fn new(base_url: &str, avatars: Vec<AvatarEntry>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            base_url: normalize_base_url(base_url).to_string(),
            count: avatars.len(),
            avatars,
        }
    }
}

/// Strip trailing slashes from a base URL.
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Join a relative key onto a base URL with exactly one `/` between them.
pub fn join_url(base_url: &str, rel_path: &str) -> String {
    let rel = rel_path.replace('\\', "/");
    format!(
        "{}/{}",
        normalize_base_url(base_url),
        rel.trim_start_matches('/')
    )
}
