//! Domain layer for the request-log server.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{RequestLog, RequestLogEntry, RequestLogTail};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::RequestLogEntryFactory;
pub use repository::RequestLogRepository;
pub use value_object::{RequestId, RequestLimit, Timestamp};
