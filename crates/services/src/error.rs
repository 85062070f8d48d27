//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use objection_core::CatalogError;
use objection_core::model::ChallengeSettingsError;

/// Errors emitted while reading `StudyConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error(transparent)]
    Settings(#[from] ChallengeSettingsError),
}

/// Errors emitted while bootstrapping a study session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}
