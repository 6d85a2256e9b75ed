//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ManifestConfig, RenameConfig};

/// Avatar renamer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "avatar-rename",
    version,
    about = "Rename Default_* avatar images to sci-fi codenames",
    long_about = "Rename vendor-default avatar images (Default_*.png/jpg/jpeg/webp) to seeded, \
                  unique sci-fi codenames.\n\n\
                  Writes avatar_rename_map.csv and avatar_rename_map.json into the directory \
                  before renaming anything."
)]
pub struct RenameArgs {
    /// Avatar directory.
    #[arg(long = "dir")]
    pub directory: Option<PathBuf>,

    /// Dry run only: print the preview, write and rename nothing.
    #[arg(long = "dry")]
    pub dry_run: bool,

    /// Seed for codename generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force the default extension instead of keeping the original one.
    #[arg(long)]
    pub no_keep_extension: bool,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, env = "AVATAR_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hide the rename progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl RenameArgs {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut RenameConfig) {
        if let Some(dir) = self.directory {
            config.directory = dir;
        }

        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.dry_run = true;
        }

        if self.no_keep_extension {
            config.keep_extension = false;
        }

        if self.quiet {
            config.show_progress = false;
        }
    }

    /// Load the config file (if any) and apply these arguments on top.
    pub fn into_config(self) -> crate::error::Result<RenameConfig> {
        let mut config = Config::load_or_default(self.config.as_deref())?.rename;
        self.merge_into_config(&mut config);
        Ok(config)
    }
}

/// Avatar manifest generator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "avatar-manifest",
    version,
    about = "Generate avatars.json for the avatar picker (standard/premium folders)"
)]
pub struct ManifestArgs {
    /// Root folder containing standard/ and/or premium/.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Public base URL, e.g. https://cdn.example.com/avatars
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output JSON file path.
    #[arg(long = "out")]
    pub output: Option<PathBuf>,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, env = "AVATAR_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl ManifestArgs {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut ManifestConfig) {
        if let Some(root) = self.root {
            config.root = Some(root);
        }

        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }

        if let Some(output) = self.output {
            config.output = output;
        }
    }

    /// Load the config file (if any) and apply these arguments on top.
    pub fn into_config(self) -> crate::error::Result<ManifestConfig> {
        let mut config = Config::load_or_default(self.config.as_deref())?.manifest;
        self.merge_into_config(&mut config);
        Ok(config)
    }
}
