//! Command-line and environment configuration.

use clap::Parser;

/// CLI chat client speaking STOMP over WebSocket
#[derive(Debug, Clone, Parser)]
#[command(name = "lantern-client", version, about)]
pub struct ClientConfig {
    /// Raw WebSocket URL of the STOMP broker
    #[arg(
        long,
        env = "LANTERN_CHAT_URL",
        default_value = "ws://localhost:8080/chat-websocket/websocket"
    )]
    pub url: String,

    /// Join immediately under this name instead of prompting
    #[arg(short, long)]
    pub username: Option<String>,
}
