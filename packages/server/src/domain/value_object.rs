//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::{Uuid, Version};

use super::error::ValueObjectError;

/// Identifier handed out by the UUID endpoint.
///
/// Always a version 4 (random) UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Create a new RequestId.
    ///
    /// # Arguments
    ///
    /// * `id` - The UUID to wrap
    ///
    /// # Returns
    ///
    /// A Result containing the RequestId or an error if the UUID is not v4
    pub fn new(id: Uuid) -> Result<Self, ValueObjectError> {
        if id.get_version() != Some(Version::Random) {
            return Err(ValueObjectError::RequestIdNotV4(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Timestamp value object.
///
/// Represents a point in time in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", lantern_shared::time::to_iso8601(&self.0))
    }
}

/// Number of entries requested from the tail of the request log.
///
/// Parsing is permissive: anything that does not yield a positive integer
/// falls back to [`RequestLimit::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimit(usize);

impl RequestLimit {
    /// Limit used when the query parameter is absent or unusable.
    pub const DEFAULT: Self = Self(10);

    /// Create a limit from a raw query value.
    ///
    /// Reads an optional sign followed by the leading run of digits, so
    /// `"5abc"` is 5. A `0x`/`0X` prefix switches to hexadecimal
    /// (`"0x1f"` is 31). Missing digits, zero and negative values give the
    /// default. Values too large for `usize` saturate.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };

        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (radix, unsigned) = match unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            Some(hex) => (16, hex),
            None => (10, unsigned),
        };

        let digits: Vec<u32> = unsigned
            .chars()
            .map_while(|c| c.to_digit(radix))
            .collect();
        if digits.is_empty() || negative {
            return Self::DEFAULT;
        }

        let value = digits.iter().fold(0usize, |acc, &digit| {
            acc.saturating_mul(radix as usize)
                .saturating_add(digit as usize)
        });

        if value == 0 {
            Self::DEFAULT
        } else {
            Self(value)
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for RequestLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}
