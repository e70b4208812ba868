//! Axum route handler for the job-posting analysis endpoint.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::analysis::analyzer::analyze_posting;
use crate::analysis::models::JobAnalysis;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze-job
///
/// Validates the posting, checks the credential, then makes exactly one model
/// call. Input and configuration problems are rejected before any upstream
/// traffic happens.
///
/// The body is taken as a raw `Value` so that an absent or wrong-typed
/// `posting` field maps to our own 400 envelope instead of the extractor's
/// default rejection.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<JobAnalysis>, AppError> {
    let posting = match body.get("posting") {
        Some(Value::String(s)) => s.trim(),
        Some(Value::Null) | None => {
            return Err(AppError::Validation(
                "posting must be a non-empty string".to_string(),
            ))
        }
        Some(_) => {
            return Err(AppError::Validation(
                "posting must be a string".to_string(),
            ))
        }
    };

    if posting.is_empty() {
        return Err(AppError::Validation(
            "posting must be a non-empty string".to_string(),
        ));
    }

    let model = state.model.as_ref().ok_or(AppError::NotConfigured)?;

    let analysis = analyze_posting(model.as_ref(), posting).await?;

    Ok(Json(analysis))
}
