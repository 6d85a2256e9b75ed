//! Manifest generator: lists tiered avatar images and their public URLs.
//!
//! Expects `standard/` and/or `premium/` under the root. The manifest is
//! regenerated from scratch on every run and overwrites the output file.

pub mod entry;
pub mod tier;

use std::fs;
use std::path::Path;

pub use entry::{join_url, normalize_base_url, AvatarEntry, AvatarManifest, MANIFEST_VERSION};
pub use tier::Tier;

use crate::config::ManifestConfig;
use crate::error::{Error, Result};
use crate::fs::{ensure_parent_dir, list_file_names};

/// Filenames in `dir` ending with `extension`, sorted case-insensitively.
pub fn scan_tier_dir(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = list_file_names(dir)?
        .into_iter()
        .filter(|name| name.ends_with(extension))
        .collect();
    names.sort_by_cached_key(|name| name.to_lowercase());
    Ok(names)
}

/// Build the manifest for `root`: standard entries first, then premium.
pub fn generate_manifest(root: &Path, base_url: &str, extension: &str) -> Result<AvatarManifest> {
    let tier_dirs: Vec<(Tier, std::path::PathBuf)> = Tier::ALL
        .iter()
        .map(|tier| (*tier, root.join(tier.dir_name())))
        .collect();

    if tier_dirs.iter().all(|(_, dir)| !dir.is_dir()) {
        return Err(Error::MissingTierDirectories {
            standard: root.join(Tier::Standard.dir_name()),
            premium: root.join(Tier::Premium.dir_name()),
        });
    }

    let mut avatars = Vec::new();
    for (tier, dir) in &tier_dirs {
        if !dir.is_dir() {
            tracing::debug!("No {} directory at {}", tier, dir.display());
            continue;
        }

        let names = scan_tier_dir(dir, extension)?;
        tracing::debug!("Found {} {} avatar(s)", names.len(), tier);
        avatars.extend(
            names
                .iter()
                .map(|name| AvatarEntry::new(base_url, *tier, name)),
        );
    }

    Ok(AvatarManifest::new(base_url, avatars))
}

/// Write the manifest as pretty JSON, creating parent directories.
pub fn write_manifest(manifest: &AvatarManifest, out_file: &Path) -> Result<()> {
    ensure_parent_dir(out_file)?;
    let content = serde_json::to_string_pretty(manifest)?;
    fs::write(out_file, content)?;
    Ok(())
}

/// Generate and write the manifest described by `config`.
pub fn run_manifest(config: &ManifestConfig) -> Result<AvatarManifest> {
    let root = config
        .root
        .as_deref()
        .ok_or_else(|| Error::MissingConfig("root".to_string()))?;
    let base_url = config
        .base_url
        .as_deref()
        .ok_or_else(|| Error::MissingConfig("base_url".to_string()))?;

    let manifest = generate_manifest(root, base_url, &config.extension)?;
    write_manifest(&manifest, &config.output)?;

    tracing::info!(
        "Manifest with {} avatar(s) written to {}",
        manifest.count,
        config.output.display()
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_files(root: &Path, files: &[&str]) {
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"x").unwrap();
        }
    }

    #[test]
    fn test_missing_tier_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_manifest(dir.path(), "https://x.test", ".png").unwrap_err();
        assert!(matches!(err, Error::MissingTierDirectories { .. }));
    }

    #[test]
    fn test_worked_example() {
        let dir = tempfile::tempdir().unwrap();
        write_files(
            dir.path(),
            &["standard/b.png", "standard/A.png", "premium/Z.png"],
        );

        let manifest = generate_manifest(dir.path(), "https://x.test/avatars/", ".png").unwrap();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "baseUrl": "https://x.test/avatars",
                "count": 3,
                "avatars": [
                    {"key": "standard/A.png", "tier": "standard", "url": "https://x.test/avatars/standard/A.png"},
                    {"key": "standard/b.png", "tier": "standard", "url": "https://x.test/avatars/standard/b.png"},
                    {"key": "premium/Z.png", "tier": "premium", "url": "https://x.test/avatars/premium/Z.png"}
                ]
            })
        );
    }

    #[test]
    fn test_partitions_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        write_files(
            dir.path(),
            &[
                "premium/a.png",
                "premium/C.png",
                "premium/b.jpg",
                "premium/nested/d.png",
                "standard/Y.png",
                "standard/x.png",
                "stray.png",
            ],
        );

        let manifest = generate_manifest(dir.path(), "https://x.test", ".png").unwrap();
        let keys: Vec<_> = manifest.avatars.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["standard/x.png", "standard/Y.png", "premium/a.png", "premium/C.png"]
        );
        assert_eq!(manifest.count, manifest.avatars.len());

        let first_premium = manifest
            .avatars
            .iter()
            .position(|a| a.tier == Tier::Premium)
            .unwrap();
        assert!(manifest.avatars[..first_premium]
            .iter()
            .all(|a| a.tier == Tier::Standard));
        assert!(manifest.avatars[first_premium..]
            .iter()
            .all(|a| a.tier == Tier::Premium));
        for avatar in &manifest.avatars {
            assert_eq!(avatar.url, format!("{}/{}", manifest.base_url, avatar.key));
        }
    }

    #[test]
    fn test_relative_base_url() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &["standard/A.png"]);
        let out = dir.path().join("avatars.json");

        let config = ManifestConfig {
            root: Some(dir.path().to_path_buf()),
            base_url: Some("/avatars/".to_string()),
            output: out.clone(),
            ..Default::default()
        };
        crate::config::validate_manifest_config(&config).unwrap();
        run_manifest(&config).unwrap();

        let written: AvatarManifest =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.base_url, "/avatars");
        assert_eq!(written.avatars[0].url, "/avatars/standard/A.png");
    }

    #[test]
    fn test_only_premium_present() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &["premium/Z.png"]);

        let manifest = generate_manifest(dir.path(), "https://x.test", ".png").unwrap();
        assert_eq!(manifest.count, 1);
        assert_eq!(manifest.avatars[0].tier, Tier::Premium);
    }

    #[test]
    fn test_run_manifest_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &["standard/A.png"]);
        let out = dir.path().join("public").join("meta").join("avatars.json");
        write_files(dir.path(), &["public/meta/avatars.json"]);

        let config = ManifestConfig {
            root: Some(dir.path().to_path_buf()),
            base_url: Some("https://x.test/avatars".to_string()),
            output: out.clone(),
            ..Default::default()
        };
        run_manifest(&config).unwrap();

        let written: AvatarManifest =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.count, 1);
        assert_eq!(written.avatars[0].url, "https://x.test/avatars/standard/A.png");
    }

    #[test]
    fn test_run_manifest_requires_root() {
        let config = ManifestConfig {
            output: PathBuf::from("unused.json"),
            ..Default::default()
        };
        assert!(matches!(
            run_manifest(&config),
            Err(Error::MissingConfig(_))
        ));
    }
}
