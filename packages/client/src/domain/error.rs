//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Username is empty after trimming
    #[error("Username cannot be empty")]
    UsernameEmpty,

    /// Message body is empty after trimming
    #[error("Message cannot be empty")]
    MessageBodyEmpty,
}

/// Errors raised by a messaging channel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The connection could not be established
    #[error("Could not connect: {0}")]
    Connect(String),

    /// The underlying socket failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The broker answered with an ERROR frame
    #[error("Broker error: {0}")]
    Broker(String),

    /// The channel is already closed
    #[error("Channel is closed")]
    Closed,
}
