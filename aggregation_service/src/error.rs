use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use price_feed::providers::errors::SourceError;
use serde_json::json;
use thiserror::Error;

/// Unified error type for aggregation API responses.
///
/// Every failure renders as `{"error": <code>, "message": <detail>}`;
/// callers never see a bare stack trace. Requests are one-shot — no
/// variant is retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request itself is malformed (missing or invalid parameters).
    #[error("{0}")]
    Validation(String),

    /// The request is well-formed but there is no data for it.
    #[error("{0}")]
    NotFound(String),

    /// The upstream price source failed (timeout, network, non-success
    /// status). The message carries the upstream reason, never the
    /// credential.
    #[error("{0}")]
    Upstream(String),

    /// An unexpected computation fault.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SourceError> for ServiceError {
    fn from(e: SourceError) -> Self {
        Self::Upstream(e.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
