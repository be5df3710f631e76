//! STOMP channel over a WebSocket connection.

use std::collections::VecDeque;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpStream,
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use crate::domain::{ChannelError, Connector, MessagingChannel};

use super::frame::{Command, Frame, decode_frames};

/// Dials a STOMP broker's raw WebSocket endpoint
/// (for SockJS servers: `<endpoint>/websocket`).
#[derive(Debug, Clone)]
pub struct StompConnector {
    url: String,
}

impl StompConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Connector for StompConnector {
    type Channel = StompChannel<MaybeTlsStream<TcpStream>>;

    async fn connect(&self) -> Result<Self::Channel, ChannelError> {
        tracing::info!("Connecting to {}", self.url);
        let (ws, _response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;

        StompChannel::handshake(ws, host_of(&self.url)).await
    }
}

/// An open STOMP session
pub struct StompChannel<S> {
    ws: WebSocketStream<S>,
    /// Decoded frames not yet handed out
    pending: VecDeque<Frame>,
    next_subscription_id: u32,
    closed: bool,
}

impl<S> StompChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Send CONNECT over an open WebSocket and wait for CONNECTED.
    pub async fn handshake(ws: WebSocketStream<S>, host: &str) -> Result<Self, ChannelError> {
        let mut channel = Self {
            ws,
            pending: VecDeque::new(),
            next_subscription_id: 0,
            closed: false,
        };

        channel
            .write_frame(&Frame::connect(host))
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;

        loop {
            while let Some(frame) = channel.pending.pop_front() {
                match frame.command {
                    Command::Connected => {
                        tracing::info!(
                            "STOMP session established (version {})",
                            frame.header("version").unwrap_or("1.0")
                        );
                        return Ok(channel);
                    }
                    Command::Error => {
                        return Err(ChannelError::Connect(error_message(&frame)));
                    }
                    other => tracing::debug!("Ignoring {} frame before CONNECTED", other),
                }
            }

            if !channel.read_frames().await? {
                return Err(ChannelError::Connect(
                    "connection closed during STOMP handshake".to_string(),
                ));
            }
        }
    }

    async fn write_frame(&mut self, frame: &Frame) -> Result<(), ChannelError> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        self.ws
            .send(Message::text(frame.encode()))
            .await
            .map_err(|e| ChannelError::Transport(e.to_string()))
    }

    /// Read one WebSocket message into `pending`.
    ///
    /// Returns `Ok(false)` once the socket is closed.
    async fn read_frames(&mut self) -> Result<bool, ChannelError> {
        let message = match self.ws.next().await {
            None => return Ok(false),
            Some(Err(e)) => return Err(ChannelError::Transport(e.to_string())),
            Some(Ok(message)) => message,
        };

        let text = match message {
            Message::Text(text) => text.as_str().to_string(),
            Message::Binary(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Ignoring non UTF-8 binary message: {}", e);
                    return Ok(true);
                }
            },
            Message::Close(_) => return Ok(false),
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => return Ok(true),
        };

        for decoded in decode_frames(&text) {
            match decoded {
                Ok(frame) => self.pending.push_back(frame),
                Err(e) => tracing::warn!("Ignoring malformed STOMP frame: {}", e),
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl<S> MessagingChannel for StompChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn subscribe(&mut self, destination: &str) -> Result<(), ChannelError> {
        let id = format!("sub-{}", self.next_subscription_id);
        self.next_subscription_id += 1;
        self.write_frame(&Frame::subscribe(&id, destination)).await?;
        tracing::debug!("Subscribed to {} as {}", destination, id);
        Ok(())
    }

    async fn send(&mut self, destination: &str, body: String) -> Result<(), ChannelError> {
        self.write_frame(&Frame::send(destination, body)).await
    }

    async fn next_message(&mut self) -> Option<Result<String, ChannelError>> {
        if self.closed {
            return None;
        }
        loop {
            while let Some(frame) = self.pending.pop_front() {
                match frame.command {
                    Command::Message => return Some(Ok(frame.body)),
                    Command::Error => {
                        self.closed = true;
                        return Some(Err(ChannelError::Broker(error_message(&frame))));
                    }
                    other => tracing::debug!("Ignoring {} frame", other),
                }
            }

            match self.read_frames().await {
                Ok(true) => {}
                Ok(false) => {
                    self.closed = true;
                    return None;
                }
                Err(e) => {
                    self.closed = true;
                    return Some(Err(e));
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), ChannelError> {
        if self.closed {
            return Ok(());
        }
        let result = self.write_frame(&Frame::disconnect()).await;
        self.closed = true;
        if let Err(e) = self.ws.close(None).await {
            tracing::debug!("WebSocket close failed: {}", e);
        }
        result
    }
}

/// `message` header of an ERROR frame, or its body.
fn error_message(frame: &Frame) -> String {
    frame
        .header("message")
        .map(str::to_string)
        .unwrap_or_else(|| frame.body.trim().to_string())
}

/// Host part of a `ws://` or `wss://` URL, used for the CONNECT `host` header.
fn host_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme);
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if authority.starts_with('[') {
        return authority
            .split_once(']')
            .map_or(authority, |(host, _)| &host[1..]);
    }
    authority.split(':').next().unwrap_or(authority)
}
