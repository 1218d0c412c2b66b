//! Bootstrap Errors
//!
//! Failures that can occur before the app is mounted.

use thiserror::Error;

/// Application startup error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No global window object")]
    MissingWindow,

    #[error("Window has no document")]
    MissingDocument,

    #[error("Mount element #{0} not found")]
    MountPointNotFound(String),

    #[error("Mount element #{0} is not an HTML element")]
    MountPointNotHtml(String),

    #[error("Invalid data-config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
