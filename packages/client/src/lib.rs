//! Chat client library.
//!
//! Joins a STOMP broker's public topic, publishes chat messages and renders
//! what the topic broadcasts.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

#[cfg(test)]
mod testing;

// Re-export entry points
pub use config::ClientConfig;
pub use ui::run as run_client;
