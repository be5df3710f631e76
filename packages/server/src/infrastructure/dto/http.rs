//! HTTP API response DTOs for the request-log server.

use serde::{Deserialize, Serialize};

use crate::domain::RequestLogEntry;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponseDto {
    pub message: String,
    pub version: String,
    pub timestamp: String, // ISO 8601
    pub libraries: Vec<String>,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    /// Seconds since process start, rounded to 2 decimals
    pub uptime: f64,
    pub timestamp: String, // ISO 8601
}

/// Body of `GET /api/uuid`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UuidResponseDto {
    pub uuid: String,
    #[serde(rename = "totalRequests")]
    pub total_requests: usize,
}

/// Request log entry as exposed by `GET /api/requests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLogEntryDto {
    pub id: String,
    pub timestamp: String, // ISO 8601
}

impl From<&RequestLogEntry> for RequestLogEntryDto {
    fn from(entry: &RequestLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            timestamp: entry.timestamp.to_string(),
        }
    }
}

/// Body of `GET /api/requests`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestsResponseDto {
    pub requests: Vec<RequestLogEntryDto>,
    pub total: usize,
}

/// Uniform error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
