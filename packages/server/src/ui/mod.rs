//! UI layer: HTTP routing, handlers and server lifecycle.

pub mod error;
pub mod handler;
pub mod response;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use router::create_router;
pub use runner::run;
