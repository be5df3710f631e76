//! Test fixtures: a fake STOMP broker and a recording view.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use futures_util::{SinkExt, StreamExt};
use lantern_client::{
    infrastructure::stomp::{Command, Frame, decode_frames},
    ui::{ChatView, RenderedEntry},
};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{accept_async, tungstenite::protocol::Message};

/// How the fake broker behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerMode {
    /// Accept the session and echo every SEND to the subscription
    Echo,
    /// Answer CONNECT with an ERROR frame
    Reject,
    /// Echo the first SEND, then close the socket
    CloseAfterFirstEcho,
    /// Echo every SEND behind an undecodable frame in the same WebSocket message
    EchoAfterGarbage,
}

/// Single-connection STOMP broker on an ephemeral port.
pub struct FakeBroker {
    pub url: String,
    received: Arc<Mutex<Vec<Frame>>>,
    handle: JoinHandle<()>,
}

impl FakeBroker {
    pub async fn start(mode: BrokerMode) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake broker");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let received = Arc::new(Mutex::new(Vec::new()));
        let handle = tokio::spawn(serve(listener, mode, received.clone()));

        Self {
            url: format!("ws://{addr}/chat-websocket/websocket"),
            received,
            handle,
        }
    }

    /// Wait for the broker to finish its connection and return every frame it received.
    pub async fn finish(self) -> Vec<Frame> {
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("Fake broker did not finish")
            .expect("Fake broker panicked");
        self.received.lock().unwrap().clone()
    }
}

async fn serve(listener: TcpListener, mode: BrokerMode, received: Arc<Mutex<Vec<Frame>>>) {
    let (stream, _) = listener.accept().await.expect("Failed to accept");
    let mut ws = accept_async(stream).await.expect("WebSocket handshake failed");
    let mut subscription: Option<String> = None;
    let mut message_id = 0;

    while let Some(Ok(message)) = ws.next().await {
        let Message::Text(text) = message else {
            continue;
        };
        for frame in decode_frames(text.as_str()) {
            let frame = frame.expect("Client sent a malformed frame");
            received.lock().unwrap().push(frame.clone());
            match frame.command {
                Command::Connect if mode == BrokerMode::Reject => {
                    let error = Frame::new(Command::Error).with_header("message", "Access refused");
                    let _ = ws.send(Message::text(error.encode())).await;
                    return;
                }
                Command::Connect => {
                    let connected = Frame::new(Command::Connected).with_header("version", "1.2");
                    ws.send(Message::text(connected.encode()))
                        .await
                        .expect("Failed to send CONNECTED");
                }
                Command::Subscribe => {
                    subscription = frame.header("id").map(str::to_string);
                }
                Command::Send => {
                    if let Some(id) = &subscription {
                        message_id += 1;
                        let echo = Frame::new(Command::Message)
                            .with_header("subscription", id.as_str())
                            .with_header("message-id", message_id.to_string())
                            .with_header("destination", "/topic/public")
                            .with_header("content-type", "application/json")
                            .with_body(frame.body.clone());
                        let payload = if mode == BrokerMode::EchoAfterGarbage {
                            format!("BOGUS\nkey:value\n\n\0{}", echo.encode())
                        } else {
                            echo.encode()
                        };
                        ws.send(Message::text(payload))
                            .await
                            .expect("Failed to send MESSAGE");
                    }
                    if mode == BrokerMode::CloseAfterFirstEcho {
                        let _ = ws.close(None).await;
                        return;
                    }
                }
                Command::Disconnect => return,
                _ => {}
            }
        }
    }
}

/// View that records what it was asked to render.
#[derive(Default)]
pub struct RecordingView {
    pub entries: Arc<Mutex<Vec<RenderedEntry>>>,
    pub chat_page_shown: bool,
    pub input_cleared: usize,
}

impl ChatView for RecordingView {
    fn show_chat_page(&mut self) {
        self.chat_page_shown = true;
    }

    fn append(&mut self, entry: RenderedEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    fn clear_message_input(&mut self) {
        self.input_cleared += 1;
    }
}
