//! Core error types for msabench

use thiserror::Error;

/// Main error type for msabench operations
#[derive(Error, Debug)]
pub enum MsabenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for msabench operations
pub type MsabenchResult<T> = Result<T, MsabenchError>;

impl From<serde_json::Error> for MsabenchError {
    fn from(err: serde_json::Error) -> Self {
        MsabenchError::Parse(err.to_string())
    }
}

impl From<anyhow::Error> for MsabenchError {
    fn from(err: anyhow::Error) -> Self {
        MsabenchError::Other(err.to_string())
    }
}
