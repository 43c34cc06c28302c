//! Error types.
//!
//! Every failure is fatal to the lifecycle step that raised it. Domain
//! errors are grouped by the component that produces them and wrapped in
//! the top-level [`Error`].

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Service configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("service config not found: {0}")]
    NotFound(String),

    #[error("failed to read service config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse service config: {0}")]
    Parse(String),

    #[error("secretBaker.secrets must be a list or a mapping, got {0}")]
    InvalidSecrets(&'static str),

    #[error("secretBaker.filePath must be a string, got {0}")]
    InvalidFilePath(&'static str),
}

/// CLI parameter errors.
#[derive(Error, Debug)]
pub enum ParamError {
    #[error("malformed param '{0}': expected key=value")]
    Malformed(String),
}

/// Secret resolution errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Unable to load Secret {0}")]
    NotFound(String),
}

/// Parameter store backend errors.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("parameter store request failed: {0}")]
    Request(String),

    #[error("parameter store response for '{name}' is missing {field}")]
    MissingField { name: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
