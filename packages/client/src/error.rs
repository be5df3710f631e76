//! Client lifecycle errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to start line editor: {0}")]
    Input(String),

    #[error("Input reader stopped before it was ready")]
    InputClosed,
}
