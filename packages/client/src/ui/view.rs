//! View abstraction for the chat UI.

use crate::domain::{ChatMessage, MessageType};

/// One rendered entry of the message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry {
    /// System notice such as "alice joined the chat!"
    Notice(String),
    /// Chat message with a sender label and a content body
    Message { sender: String, content: String },
}

impl From<&ChatMessage> for RenderedEntry {
    fn from(message: &ChatMessage) -> Self {
        match message.r#type {
            MessageType::Join => Self::Notice(format!("{} joined the chat!", message.sender)),
            MessageType::Leave => Self::Notice(format!("{} left the chat!", message.sender)),
            MessageType::Chat | MessageType::Other => Self::Message {
                sender: message.sender.clone(),
                content: message.content.clone().unwrap_or_default(),
            },
        }
    }
}

/// Where the chat client draws.
///
/// Two pages: username entry (initial) and chat. `append` always leaves
/// the newest entry in view.
#[cfg_attr(test, mockall::automock)]
pub trait ChatView: Send {
    /// Hide the username page and show the chat page
    fn show_chat_page(&mut self);

    /// Add an entry at the bottom of the message area
    fn append(&mut self, entry: RenderedEntry);

    /// Empty the message input field after a send
    fn clear_message_input(&mut self);
}
