//! Filesystem module.
//!
//! Provides:
//! - Filename parsing, sanitizing and sort-key normalization
//! - Directory listing and path helpers

pub mod naming;
pub mod paths;

pub use naming::{has_extension, sanitize_filename, split_extension, KeyNormalizer};
pub use paths::{ensure_parent_dir, is_same_file, list_file_names};
