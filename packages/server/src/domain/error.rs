//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RequestId is not a version 4 (random) UUID
    #[error("RequestId must be a version 4 UUID (got: {0})")]
    RequestIdNotV4(String),
}

/// Errors raised by request log storage
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store cannot be reached
    #[error("Request log is unavailable: {0}")]
    Unavailable(String),
}
