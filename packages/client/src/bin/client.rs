//! Terminal chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lantern-client -- --url ws://localhost:8080/chat-websocket/websocket
//! ```

use clap::Parser;
use lantern_client::ClientConfig;
use lantern_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let config = ClientConfig::parse();

    if let Err(e) = lantern_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
