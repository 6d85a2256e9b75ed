//! Configuration module for the avatar tools.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, ManifestConfig, RenameConfig};
pub use validation::{check_base_url, validate_manifest_config, validate_rename_config};
