//! Error types for tfinject.
//!
//! Each concern gets its own enum; [`Error`] wraps them so `?` works across
//! module boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and environment validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required variable: {var}")]
    MissingVar { var: &'static str },
}

/// Secrets store errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to get secret '{secret_id}': {reason}")]
    Request { secret_id: String, reason: String },

    #[error("secret '{0}' has no string value")]
    NoSecretString(String),

    #[error("secret '{secret_id}' is not valid credentials JSON: {source}")]
    InvalidJson {
        secret_id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Template file rewrite errors.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
