//! Handler modules for HTTP endpoints.

pub mod http;
pub mod middleware;

// Re-export HTTP handlers
pub use http::{generate_uuid, health_check, list_requests, not_found, welcome};

pub use middleware::require_get;
