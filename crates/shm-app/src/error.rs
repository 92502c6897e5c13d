//! Error types for the shm-app service layer.

use std::path::PathBuf;

use shm_core::ShmError;

/// Application error type that wraps errors from the engine and scenario
/// crates and gives every frontend one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Engine error: {0}")]
    Engine(#[from] ShmError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for shm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<shm_scenario::ScenarioError> for AppError {
    fn from(err: shm_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<shm_scenario::ValidationError> for AppError {
    fn from(err: shm_scenario::ValidationError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<shm_sim::ParseMethodError> for AppError {
    fn from(err: shm_sim::ParseMethodError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
