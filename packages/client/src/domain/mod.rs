//! Domain layer for the chat client.
//!
//! Message shapes, validated user input and the messaging channel
//! abstraction. Independent of the STOMP transport and the terminal UI.

pub mod channel;
pub mod error;
pub mod message;
pub mod value_object;

pub use channel::{
    ADD_USER_DESTINATION, Connector, MessagingChannel, PUBLIC_TOPIC, SEND_MESSAGE_DESTINATION,
};
pub use error::{ChannelError, ValueObjectError};
pub use message::{ChatMessage, MessageType};
pub use value_object::{MessageBody, Username};
