//! CLI argument parsing module.

pub mod args;

pub use args::{ManifestArgs, RenameArgs};
