//! Configuration validation logic.

use crate::config::loader::{ManifestConfig, RenameConfig};
use crate::error::{Error, Result};
use url::Url;

/// Validate the renamer configuration.
pub fn validate_rename_config(config: &RenameConfig) -> Result<()> {
    if config.name_prefix.is_empty() {
        return Err(Error::ConfigValidation {
            field: "name_prefix".to_string(),
            message: "Prefix must not be empty; it would match every image".to_string(),
        });
    }

    if config.extensions.is_empty() {
        return Err(Error::ConfigValidation {
            field: "extensions".to_string(),
            message: "At least one image extension is required".to_string(),
        });
    }

    for ext in &config.extensions {
        validate_extension("extensions", ext)?;
    }
    validate_extension("default_extension", &config.default_extension)?;

    if config.preview_limit == 0 {
        return Err(Error::ConfigValidation {
            field: "preview_limit".to_string(),
            message: "Preview limit must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the manifest configuration.
pub fn validate_manifest_config(config: &ManifestConfig) -> Result<()> {
    if config.root.is_none() {
        return Err(Error::MissingConfig("root".to_string()));
    }

    match config.base_url.as_deref() {
        Some(base_url) => {
            check_base_url(base_url);
        }
        None => return Err(Error::MissingConfig("base_url".to_string())),
    }

    validate_extension("extension", &config.extension)?;

    Ok(())
}

/// Check a public base URL, warning when it is not an absolute URL or
/// carries a query or fragment.
///
/// Relative and scheme-relative bases are legitimate, so this never fails;
/// keys are appended to the base verbatim either way. Returns whether the
/// base looked like a plain absolute URL.
pub fn check_base_url(base_url: &str) -> bool {
    match Url::parse(base_url) {
        Ok(url) if url.query().is_some() || url.fragment().is_some() => {
            tracing::warn!(
                "Base URL {} carries a query or fragment; avatar keys will be appended after it",
                base_url
            );
            false
        }
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Base URL {} is not an absolute URL ({})", base_url, e);
            false
        }
    }
}

/// Validate an extension of the form `.png`.
fn validate_extension(field: &str, ext: &str) -> Result<()> {
    let valid = ext
        .strip_prefix('.')
        .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(false);

    if !valid {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Extension '{}' must be a dot followed by letters or digits",
                ext
            ),
        });
    }

    Ok(())
}
