//! Mapping from engine errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tarot_core::TarotError;

/// Message returned for every internal failure. Details go to the log only.
pub const INTERNAL_ERROR_DETAIL: &str = "An internal error occurred. Please try again later.";

/// Message returned for unknown routes.
pub const NOT_FOUND_DETAIL: &str = "Endpoint not found.";

/// Alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

/// An error on its way to becoming a `{ "detail": ... }` response.
#[derive(Debug)]
pub struct ApiError(pub TarotError);

impl ApiError {
    /// The status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TarotError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            TarotError::NotFound(_) => StatusCode::NOT_FOUND,
            TarotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    pub fn detail(&self) -> String {
        match &self.0 {
            TarotError::InvalidArgument(msg) | TarotError::NotFound(msg) => msg.clone(),
            TarotError::Internal(_) => INTERNAL_ERROR_DETAIL.to_string(),
        }
    }
}

impl From<TarotError> for ApiError {
    fn from(err: TarotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            TarotError::Internal(msg) => tracing::error!(error = %msg, "internal error"),
            other => tracing::warn!(status = status.as_u16(), error = %other, "request failed"),
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_kind() {
        let cases = [
            (TarotError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (TarotError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (TarotError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn internal_detail_is_generic() {
        let err = ApiError(TarotError::Internal("rng exploded at draw.rs:42".into()));
        assert_eq!(err.detail(), INTERNAL_ERROR_DETAIL);
        assert!(!err.detail().contains("draw.rs"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError(TarotError::no_card_matching("joker"));
        assert_eq!(err.detail(), "no card found matching 'joker'");
    }
}
