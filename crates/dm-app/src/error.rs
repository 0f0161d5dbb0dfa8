//! Error types for the dm-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: dm_project::ProjectError,
    },

    #[error("Failed to write scenario file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: dm_project::ProjectError,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Calculation error: {0}")]
    Calculation(#[from] dm_core::DmError),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("Audit worker stopped before replying")]
    AuditDisconnected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<dm_project::ProjectError> for AppError {
    fn from(err: dm_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<dm_project::ValidationError> for AppError {
    fn from(err: dm_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
