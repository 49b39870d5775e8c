use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use trivia_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success, error, message }`
/// error body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed read query.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failed insert or delete. Reported as unprocessable, not as a
    /// server error.
    #[error("Storage mutation failed: {0}")]
    Mutation(#[source] sqlx::Error),

    /// A malformed request (body, path or query) with a human-readable reason.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failure outside storage, such as a handler panic. The message is
    /// logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

/// Client-facing message for an error status.
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::REQUEST_TIMEOUT => "request timeout",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

/// Build the standard error response for `status`.
pub fn error_response(status: StatusCode) -> Response {
    let body = ErrorBody {
        success: false,
        error: status.as_u16(),
        message: status_message(status),
    };
    (status, axum::Json(body)).into_response()
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::Empty(_) => StatusCode::NOT_FOUND,
                CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Mutation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Details stay in the logs; clients only see the status message.
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else if matches!(self, AppError::Mutation(_)) {
            tracing::warn!(error = %self, "Storage mutation rejected");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        error_response(status)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
