//! HTTP API errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    infrastructure::dto::http::ErrorResponseDto,
    ui::response::PrettyJson,
    usecase::{GenerateUuidError, ListRequestsError},
};

/// Errors returned to HTTP clients with a uniform `{ "error": ... }` body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Details are logged, never sent to the client
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }
        let body = ErrorResponseDto {
            error: self.to_string(),
        };
        (self.status_code(), PrettyJson(body)).into_response()
    }
}

impl From<GenerateUuidError> for ApiError {
    fn from(e: GenerateUuidError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<ListRequestsError> for ApiError {
    fn from(e: ListRequestsError) -> Self {
        Self::Internal(e.to_string())
    }
}
