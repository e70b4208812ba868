//! Analyzer core — builds the prompt, makes exactly one model call, and turns
//! whatever text comes back into a `JobAnalysis` or a typed error.

use tracing::info;

use crate::analysis::models::JobAnalysis;
use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::errors::AppError;
use crate::llm::{CompletionModel, ModelError};

/// Substrings that mark an upstream failure as a quota problem rather than a
/// generic outage. This is string-matching on provider wording and therefore
/// fragile; it is centralized here so a provider change has one place to land.
const QUOTA_MARKERS: [&str; 2] = ["429", "RESOURCE_EXHAUSTED"];

/// Analyzes a job posting with a single, non-streaming completion call.
///
/// No retries: the model is not deterministic and the caller is expected to
/// resubmit manually if it wants another attempt.
pub async fn analyze_posting(
    model: &dyn CompletionModel,
    posting: &str,
) -> Result<JobAnalysis, AppError> {
    let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{posting}", posting);

    let raw = model
        .complete(ANALYZE_SYSTEM, &prompt)
        .await
        .map_err(classify_model_error)?;

    let analysis = parse_analysis(&raw)?;

    info!(
        "Posting analyzed: {} ideas, {} talking points",
        analysis.project_ideas.len(),
        analysis.talking_points.len()
    );

    Ok(analysis)
}

/// Parses model output into the analysis schema.
///
/// On failure the verbatim model text rides along in the error so the caller
/// can see exactly what the model said.
pub fn parse_analysis(raw: &str) -> Result<JobAnalysis, AppError> {
    let text = strip_json_fences(raw);
    serde_json::from_str(text).map_err(|source| AppError::ParseFailure {
        raw: raw.to_string(),
        source,
    })
}

fn classify_model_error(error: ModelError) -> AppError {
    let message = error.to_string();
    if is_quota_error(&message) {
        AppError::RateLimited(message)
    } else {
        AppError::Upstream(message)
    }
}

/// True when an upstream error message looks like a quota/rate-limit signal.
pub fn is_quota_error(message: &str) -> bool {
    QUOTA_MARKERS.iter().any(|m| message.contains(m))
        || message.to_ascii_lowercase().contains("quota")
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// The prompt forbids fences, but models wrap JSON in them anyway.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
