//! CLI subcommands.

pub mod admin;
pub mod seed;
pub mod stats;

use thiserror::Error;
use tracing::debug;

use wighub_admin::services::AdminError;
use wighub_admin::{AdminConfig, ConfigError};
use wighub_store::{FileStore, RepositoryError, StoreError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The data directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Stored data could not be read or written.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// A back-office operation was refused.
    #[error("{0}")]
    Admin(#[from] AdminError),

    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: super_admin, admin, viewer")]
    InvalidRole(String),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be encoded.
    #[error("Encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Open the file store in the configured data directory.
///
/// # Errors
///
/// Returns `CommandError::Store` if the directory cannot be created.
pub fn open_store(config: &AdminConfig) -> Result<FileStore, CommandError> {
    debug!(dir = %config.data_dir.display(), "Opening data directory");
    Ok(FileStore::open(&config.data_dir)?)
}
