use thiserror::Error;

/// Errors raised while building or decoding blocks
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
