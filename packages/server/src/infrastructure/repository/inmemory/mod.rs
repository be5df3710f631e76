//! In-memory repository implementations.

mod request_log;

pub use request_log::InMemoryRequestLogRepository;
