//! Request-log demo server.
//!
//! Run with:
//! ```not_rust
//! PORT=3000 cargo run --bin lantern-server
//! ```

use clap::Parser;
use lantern_server::ServerConfig;
use lantern_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = lantern_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
