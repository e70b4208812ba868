use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure the analyzer can hit maps to exactly one variant, and every
/// variant to exactly one status code, so callers can branch on the response
/// without string-matching our messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analyzer is not configured")]
    NotConfigured,

    #[error("Model output did not match the analysis schema: {source}")]
    ParseFailure {
        /// The verbatim model output, returned to the caller for diagnosis.
        raw: String,
        source: serde_json::Error,
    },

    #[error("Model is over quota: {0}")]
    RateLimited(String),

    #[error("Model call failed: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            AppError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NOT_CONFIGURED",
                "Job analysis is not configured on this server".to_string(),
            ),
            AppError::ParseFailure { source, .. } => {
                tracing::error!("Model output failed to parse: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_FAILURE",
                    "The model returned output that did not match the expected schema".to_string(),
                )
            }
            AppError::RateLimited(msg) => {
                tracing::warn!("Upstream rate limit hit: {msg}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    "The analysis model is temporarily over quota — try again in a minute"
                        .to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream model error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "The analysis model could not be reached".to_string(),
                )
            }
        };

        // ParseFailure carries the unparsed model text so a failing schema can
        // be diagnosed from the response alone.
        let body = match self {
            AppError::ParseFailure { raw, .. } => Json(json!({
                "error": { "code": code, "message": message },
                "raw": raw
            })),
            _ => Json(json!({
                "error": { "code": code, "message": message }
            })),
        };

        (status, body).into_response()
    }
}
