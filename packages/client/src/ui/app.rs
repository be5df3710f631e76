//! Chat client state machine.
//!
//! Replaces page globals with explicit state: the current page, and once
//! connected, a [`ChatSession`] owning the channel and the username.

use crate::{
    domain::{ChannelError, ChatMessage, Connector, MessageBody, MessagingChannel, Username},
    ui::view::{ChatView, RenderedEntry},
    usecase::{JoinChatUseCase, SendMessageUseCase},
};

/// An active connection and the name it joined under
pub struct ChatSession<C> {
    channel: C,
    username: Username,
}

enum Page<C> {
    /// Waiting for a username
    UsernameEntry,
    /// Chat page; `None` while not (or no longer) connected
    Chat(Option<ChatSession<C>>),
}

/// Chat client driven by form submissions and inbound messages.
pub struct ChatClient<K: Connector, V: ChatView> {
    connector: K,
    view: V,
    page: Page<K::Channel>,
}

impl<K: Connector, V: ChatView> ChatClient<K, V> {
    pub fn new(connector: K, view: V) -> Self {
        Self {
            connector,
            view,
            page: Page::UsernameEntry,
        }
    }

    /// Whether the chat page is showing
    pub fn is_chat_page(&self) -> bool {
        matches!(self.page, Page::Chat(_))
    }

    /// Whether a session is active
    pub fn is_connected(&self) -> bool {
        matches!(self.page, Page::Chat(Some(_)))
    }

    pub fn username(&self) -> Option<&Username> {
        match &self.page {
            Page::Chat(Some(session)) => Some(&session.username),
            _ => None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Username form submission.
    ///
    /// A blank name is ignored. Otherwise the chat page is shown, then the
    /// client connects, subscribes and announces itself. Connection
    /// failures are only logged.
    pub async fn submit_username(&mut self, raw: &str) {
        if self.is_chat_page() {
            return;
        }
        let username = match Username::new(raw) {
            Ok(username) => username,
            Err(e) => {
                tracing::debug!("Ignoring username submission: {}", e);
                return;
            }
        };

        self.view.show_chat_page();
        self.page = Page::Chat(None);

        let mut channel = match self.connector.connect().await {
            Ok(channel) => channel,
            Err(e) => {
                tracing::error!(
                    "Could not connect to WebSocket server. Please restart the client to try again! {}",
                    e
                );
                return;
            }
        };

        match JoinChatUseCase::new(&mut channel).execute(&username).await {
            Ok(()) => self.page = Page::Chat(Some(ChatSession { channel, username })),
            Err(e) => tracing::error!("Failed to join the chat: {}", e),
        }
    }

    /// Message form submission.
    ///
    /// Returns `true` when a message was published. Blank input and
    /// submissions without an active session are ignored.
    pub async fn submit_message(&mut self, raw: &str) -> bool {
        let Page::Chat(Some(session)) = &mut self.page else {
            return false;
        };
        let Ok(body) = MessageBody::new(raw) else {
            return false;
        };

        match SendMessageUseCase::new(&mut session.channel)
            .execute(&session.username, body)
            .await
        {
            Ok(()) => {
                self.view.clear_message_input();
                true
            }
            Err(e) => {
                tracing::error!("Failed to send message: {}", e);
                false
            }
        }
    }

    /// Next inbound payload. Pends forever while there is no session, so it
    /// can sit in a `select!` next to user input.
    pub async fn next_inbound(&mut self) -> Option<Result<String, ChannelError>> {
        match &mut self.page {
            Page::Chat(Some(session)) => session.channel.next_message().await,
            _ => std::future::pending().await,
        }
    }

    /// Render one inbound payload. Malformed payloads are logged and dropped.
    pub fn receive(&mut self, payload: &str) {
        match ChatMessage::from_json(payload) {
            Ok(message) => self.view.append(RenderedEntry::from(&message)),
            Err(e) => tracing::error!("Failed to parse inbound message: {}", e),
        }
    }

    /// The broker went away. The session is dropped; there is no reconnect.
    pub fn connection_lost(&mut self, cause: Option<ChannelError>) {
        match cause {
            Some(e) => tracing::error!("Connection lost: {}", e),
            None => tracing::error!("Connection closed by the server"),
        }
        if self.is_connected() {
            self.page = Page::Chat(None);
        }
    }

    /// Close the session, if any.
    pub async fn close(&mut self) {
        if let Page::Chat(Some(session)) = &mut self.page {
            if let Err(e) = session.channel.close().await {
                tracing::warn!("Failed to close the connection: {}", e);
            }
            self.page = Page::Chat(None);
        }
    }
}
