//! Publish/subscribe channel abstraction.

use async_trait::async_trait;

use super::error::ChannelError;

/// Broadcast topic every client subscribes to
pub const PUBLIC_TOPIC: &str = "/topic/public";

/// Destination for presence announcements
pub const ADD_USER_DESTINATION: &str = "/app/chat.addUser";

/// Destination for chat messages
pub const SEND_MESSAGE_DESTINATION: &str = "/app/chat.sendMessage";

/// An established connection to the message broker
#[async_trait]
pub trait MessagingChannel: Send {
    /// Subscribe to a destination. Messages arrive through [`next_message`].
    ///
    /// [`next_message`]: MessagingChannel::next_message
    async fn subscribe(&mut self, destination: &str) -> Result<(), ChannelError>;

    /// Publish a JSON body to a destination.
    async fn send(&mut self, destination: &str, body: String) -> Result<(), ChannelError>;

    /// Body of the next message from any subscription.
    ///
    /// `None` once the broker closed the connection. Must be cancel safe:
    /// dropping the future loses no message.
    async fn next_message(&mut self) -> Option<Result<String, ChannelError>>;

    /// Leave the broker politely and close the connection.
    async fn close(&mut self) -> Result<(), ChannelError>;
}

/// Opens [`MessagingChannel`]s
#[async_trait]
pub trait Connector: Send + Sync {
    type Channel: MessagingChannel;

    async fn connect(&self) -> Result<Self::Channel, ChannelError>;
}
