//! Error types for the avatar tools.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Input errors
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Expected {} and/or {} to exist", .standard.display(), .premium.display())]
    MissingTierDirectories { standard: PathBuf, premium: PathBuf },

    // Data integrity errors
    #[error("Collision detected: {0}")]
    Collision(String),

    #[error("Collision detected: {new_name} is planned for both {first} and {second}")]
    BatchCollision {
        new_name: String,
        first: String,
        second: String,
    },

    #[error("Codename pool exhausted after {0} names")]
    CodenamesExhausted(usize),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map the error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::DirectoryNotFound(_)
            | Error::MissingTierDirectories { .. }
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Collision(_)
            | Error::BatchCollision { .. }
            | Error::CodenamesExhausted(_)
            | Error::InvalidFilename(_) => exit_codes::INTEGRITY_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const INTEGRITY_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
