//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors from generating and recording a UUID
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateUuidError {
    #[error("Failed to generate request id: {0}")]
    IdGeneration(#[from] ValueObjectError),

    #[error("Failed to record request: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors from reading the request log
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListRequestsError {
    #[error("Failed to read request log: {0}")]
    Repository(#[from] RepositoryError),
}
