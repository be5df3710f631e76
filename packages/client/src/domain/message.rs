//! Chat message wire format.

use serde::{Deserialize, Serialize};

use super::value_object::{MessageBody, Username};

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Join,
    Leave,
    Chat,
    /// Any type this client does not know. Received only, never sent.
    #[serde(other, skip_serializing)]
    Other,
}

/// Chat message exchanged with the broker as JSON.
///
/// `content` is absent for JOIN and LEAVE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub r#type: MessageType,
}

impl ChatMessage {
    /// Presence announcement for a newly connected user
    pub fn join(username: &Username) -> Self {
        Self {
            sender: username.as_str().to_string(),
            content: None,
            r#type: MessageType::Join,
        }
    }

    /// Regular chat message
    pub fn chat(username: &Username, body: MessageBody) -> Self {
        Self {
            sender: username.as_str().to_string(),
            content: Some(body.into_string()),
            r#type: MessageType::Chat,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
