//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix the image vendor gives to generated avatars.
pub const DEFAULT_NAME_PREFIX: &str = "Default_";

/// Seed for the codename generator.
pub const DEFAULT_SEED: u64 = 1337;

/// Number of mappings shown before the rename preview is truncated.
pub const DEFAULT_PREVIEW_LIMIT: usize = 20;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Renamer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Directory to scan (non-recursive).
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Preview only, write nothing.
    #[serde(default)]
    pub dry_run: bool,

    /// Only files whose name starts with this literal are renamed.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Accepted extensions, with leading dot, compared case-insensitively.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Seed for the codename generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Keep the original extension instead of forcing `default_extension`.
    #[serde(default = "default_true")]
    pub keep_extension: bool,

    /// Extension used when `keep_extension` is off.
    #[serde(default = "default_png")]
    pub default_extension: String,

    /// Number of mappings printed in the preview.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,

    /// Whether to show the rename progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            dry_run: false,
            name_prefix: default_name_prefix(),
            extensions: default_extensions(),
            seed: DEFAULT_SEED,
            keep_extension: true,
            default_extension: default_png(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            show_progress: true,
        }
    }
}

/// Manifest generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Root folder containing `standard/` and/or `premium/`.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Public base URL the avatar keys are joined onto.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Output JSON file path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Image extension listed in the manifest, with leading dot.
    #[serde(default = "default_png")]
    pub extension: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: None,
            base_url: None,
            output: default_output(),
            extension: default_png(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_extensions() -> Vec<String> {
    [".png", ".jpg", ".jpeg", ".webp"]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_true() -> bool {
    true
}

fn default_png() -> String {
    ".png".to_string()
}

fn default_preview_limit() -> usize {
    DEFAULT_PREVIEW_LIMIT
}

fn default_output() -> PathBuf {
    PathBuf::from("avatars.json")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if given, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
