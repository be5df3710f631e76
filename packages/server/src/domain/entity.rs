//! Core domain models for the request-log server.

use super::value_object::{RequestId, Timestamp};

/// One served call of the UUID endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogEntry {
    /// Identifier handed out to the caller
    pub id: RequestId,
    /// Timestamp when the identifier was generated
    pub timestamp: Timestamp,
}

impl RequestLogEntry {
    /// Create a new log entry
    pub fn new(id: RequestId, timestamp: Timestamp) -> Self {
        Self { id, timestamp }
    }
}

/// Append-only, arrival-ordered log of served UUID requests
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    entries: Vec<RequestLogEntry>,
}

impl RequestLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return the log length after the append
    pub fn append(&mut self, entry: RequestLogEntry) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    /// The last `limit` entries, oldest first
    pub fn tail(&self, limit: usize) -> &[RequestLogEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Number of entries ever appended
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot of the newest log entries together with the full log length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogTail {
    /// Newest entries, oldest first
    pub entries: Vec<RequestLogEntry>,
    /// Full log length at the time of the snapshot
    pub total: usize,
}
