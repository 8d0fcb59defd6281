//! Handler-boundary error type.
//!
//! Everything that escapes a handler is an unexpected failure by this
//! service's taxonomy. Resolution misses and degraded upstreams are shaped
//! into ordinary responses long before this point; the remaining cases all
//! answer 500 with the error's display message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that reach the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream transport or decode failure outside the documented
    /// degradation ladder
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    /// The `date` query parameter was not a valid `YYYY-MM-DD` date
    #[error("Data inválida: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_renders_500() {
        let err = ApiError::from("not-a-date".parse::<chrono::NaiveDate>().unwrap_err());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_carries_the_cause() {
        let err = ApiError::from("2024-13-99".parse::<chrono::NaiveDate>().unwrap_err());
        assert!(err.to_string().starts_with("Data inválida"));
    }
}
