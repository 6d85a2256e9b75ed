//! Candidate file discovery and ordering.

use std::path::{Path, PathBuf};

use crate::config::RenameConfig;
use crate::error::{Error, Result};
use crate::fs::{has_extension, list_file_names, split_extension, KeyNormalizer};

/// An image file selected for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Full filename, e.g. `Default_Hero_7.PNG`.
    pub name: String,

    /// Extension with leading dot, original case.
    pub extension: String,

    /// Directory containing the file.
    pub parent: PathBuf,

    /// Ordering key derived from the stem.
    pub sort_key: String,
}

impl ImageFile {
    /// Full path on disk.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// Find every matching image directly inside the configured directory,
/// sorted by `(sort key, lowercased name)`.
pub fn discover_images(config: &RenameConfig) -> Result<Vec<ImageFile>> {
    let dir = config.directory.as_path();
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let normalizer = KeyNormalizer::new(&config.name_prefix)?;
    let mut files: Vec<ImageFile> = list_file_names(dir)?
        .into_iter()
        .filter(|name| name.starts_with(config.name_prefix.as_str()))
        .filter(|name| has_extension(name, &config.extensions))
        .map(|name| image_file(dir, name, &normalizer))
        .collect();

    files.sort_by_cached_key(|f| (f.sort_key.clone(), f.name.to_lowercase()));

    tracing::debug!("Discovered {} image(s) in {}", files.len(), dir.display());
    Ok(files)
}

fn image_file(dir: &Path, name: String, normalizer: &KeyNormalizer) -> ImageFile {
    let (stem, ext) = split_extension(&name);
    let sort_key = normalizer.normalize(stem);
    let extension = ext.to_string();

    ImageFile {
        name,
        extension,
        parent: dir.to_path_buf(),
        sort_key,
    }
}
