//! Value Objects for user input.

use std::fmt;

use super::error::ValueObjectError;

/// Name the user chats under.
///
/// Surrounding whitespace is trimmed; the result is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::UsernameEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of an outgoing chat message, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageBodyEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
