//! Avatar Tools - offline housekeeping for avatar image sets
//!
//! This library backs two command-line tools:
//!
//! - `avatar-rename` renames vendor-default `Default_*` images to seeded,
//!   unique codenames and keeps a CSV/JSON audit map of every rename
//! - `avatar-manifest` lists the images under `standard/` and `premium/`
//!   and writes `avatars.json` with their public URLs
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use avatar_tools::{generate_manifest, write_manifest};
//!
//! fn main() -> avatar_tools::Result<()> {
//!     let manifest = generate_manifest(
//!         &PathBuf::from("public/avatars"),
//!         "https://cdn.example.com/avatars/",
//!         ".png",
//!     )?;
//!     write_manifest(&manifest, &PathBuf::from("avatars.json"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use config::{Config, ManifestConfig, RenameConfig};
pub use error::{Error, Result};
pub use manifest::{
    generate_manifest, run_manifest, write_manifest, AvatarEntry, AvatarManifest, Tier,
};
pub use rename::{run_rename, RenameMapping, RenameOutcome, RenamePlan};
