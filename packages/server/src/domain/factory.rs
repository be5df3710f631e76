//! Creation of log entries.

use chrono::{DateTime, Utc};

use super::{RequestId, RequestLogEntry, Timestamp, error::ValueObjectError};

/// Issues request log entries: a fresh v4 identifier stamped with the given instant.
pub struct RequestLogEntryFactory;

impl RequestLogEntryFactory {
    /// Issue an entry for a request served at `at`.
    ///
    /// Fails only if the generated identifier is not a v4 UUID.
    pub fn issue(at: DateTime<Utc>) -> Result<RequestLogEntry, ValueObjectError> {
        let id = RequestId::new(uuid::Uuid::new_v4())?;
        Ok(RequestLogEntry::new(id, Timestamp::new(at)))
    }
}
