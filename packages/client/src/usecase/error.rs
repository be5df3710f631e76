//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::ChannelError;

/// Errors while publishing to the broker
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}
