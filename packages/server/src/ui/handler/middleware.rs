//! Request middleware.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::ui::error::ApiError;

/// Reject every method other than GET before routing, so unknown paths
/// answer 405 rather than 404 for non-GET requests.
pub async fn require_get(request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        tracing::debug!(
            "Rejecting {} {}",
            request.method(),
            request.uri().path()
        );
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}
