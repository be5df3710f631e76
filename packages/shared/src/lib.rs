//! Shared utilities for the Lantern server and client.

pub mod logger;
pub mod time;
