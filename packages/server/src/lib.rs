//! Request-log demo server.
//!
//! Serves four JSON routes (welcome, health, UUID generation, request
//! history) backed by an in-memory append-only log.

pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
