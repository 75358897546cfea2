//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::ai::chat::Busy;

// Errors

pub struct ApiError {
    status: StatusCode,
    error: anyhow::Error,
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.error);
        } else {
            tracing::debug!("{}", self.error);
        }

        (self.status, format!("Something went wrong: {}", self.error)).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`. A `Busy`
/// session is a conflict rather than a server failure.
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();
        let status = if error.is::<Busy>() {
            StatusCode::CONFLICT
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self { status, error }
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}
