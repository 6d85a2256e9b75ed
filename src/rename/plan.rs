//! Rename planning: codename assignment and collision checks.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::RenameConfig;
use crate::error::{Error, Result};
use crate::fs::{is_same_file, sanitize_filename};
use crate::rename::codename::CodenameGenerator;
use crate::rename::discovery::ImageFile;

/// One old-name to new-name correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameMapping {
    pub old: String,
    pub new: String,
}

/// The full set of renames for one directory, in commit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub mappings: Vec<RenameMapping>,
}

impl RenamePlan {
    /// Number of planned renames.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Assign a codename to every file (in the given order) and check the
/// resulting names for collisions.
///
/// Fails before anything is written if a new name is already taken on disk
/// by a different file, or clashes with another name in the same batch.
pub fn build_plan(config: &RenameConfig, files: &[ImageFile]) -> Result<RenamePlan> {
    let mut generator = CodenameGenerator::new(config.seed);
    let mut mappings = Vec::with_capacity(files.len());

    // Lowercased so case-insensitive filesystems are covered too.
    let sources: HashMap<String, &str> = files
        .iter()
        .map(|f| (f.name.to_lowercase(), f.name.as_str()))
        .collect();
    let mut planned: HashMap<String, String> = HashMap::with_capacity(files.len());

    for file in files {
        let codename = generator.next_unique()?;
        let ext = if config.keep_extension {
            file.extension.as_str()
        } else {
            config.default_extension.as_str()
        };
        let new_name = sanitize_filename(&format!("{}{}", codename, ext))?;
        let new_path = file.parent.join(&new_name);

        if new_path.exists() && !is_same_file(&new_path, &file.path())? {
            return Err(Error::Collision(new_name));
        }

        let folded = new_name.to_lowercase();
        if let Some(first) = planned.get(&folded) {
            return Err(Error::BatchCollision {
                new_name,
                first: first.clone(),
                second: file.name.clone(),
            });
        }
        if let Some(other) = sources.get(&folded) {
            if *other != file.name {
                return Err(Error::BatchCollision {
                    new_name,
                    first: (*other).to_string(),
                    second: file.name.clone(),
                });
            }
        }
        planned.insert(folded, file.name.clone());

        tracing::debug!("Planned {} -> {}", file.name, new_name);
        mappings.push(RenameMapping {
            old: file.name.clone(),
            new: new_name,
        });
    }

    Ok(RenamePlan {
        directory: config.directory.clone(),
        mappings,
    })
}
