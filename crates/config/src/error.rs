//! Configuration loading errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at {path}: {reason}")]
    FileNotFound { path: String, reason: String },

    #[error("failed to parse {what}: {reason}")]
    Parse { what: String, reason: String },

    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("validation failed: {0}")]
    Validation(String),
}

impl From<ConfigError> for smartpost_core::Error {
    fn from(err: ConfigError) -> Self {
        smartpost_core::Error::Config(err.to_string())
    }
}
