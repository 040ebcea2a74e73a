//! Error types for the editor

use crate::store::StoreError;
use mailblocks_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Import payload is not an ordered sequence of blocks
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Model error: {0}")]
    Model(ModelError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ModelError> for EditorError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidFormat(message) => EditorError::InvalidFormat(message),
            other => EditorError::Model(other),
        }
    }
}
