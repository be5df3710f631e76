//! Repository trait for the request log.
//!
//! The domain layer owns the abstraction; infrastructure provides the
//! implementation (dependency inversion).

use async_trait::async_trait;

use super::{RepositoryError, RequestLogEntry, RequestLogTail};

/// Storage for the append-only request log
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// Append an entry and return the log length right after this append.
    async fn append(&self, entry: RequestLogEntry) -> Result<usize, RepositoryError>;

    /// The last `limit` entries (oldest first) and the full log length,
    /// taken from one consistent snapshot.
    async fn tail(&self, limit: usize) -> Result<RequestLogTail, RepositoryError>;
}
